use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm italic text-gray-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
