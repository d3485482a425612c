use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <span class="text-2xl">{"❌"}</span>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{"Nalaganje ni uspelo"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
        </div>
    }
}
