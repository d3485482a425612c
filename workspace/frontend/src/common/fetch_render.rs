use yew::prelude::*;
use crate::hooks::LoadState;
use super::loading::Loading;
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct LoadRenderProps<T: Clone + PartialEq + 'static> {
    pub state: LoadState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub loading_text: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for LoadRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.loading_text == other.loading_text
    }
}

/// Component that handles rendering based on LoadState
/// - Pending: shows loading spinner
/// - Failure: shows error display
/// - Success: calls render callback with data
#[function_component(LoadRender)]
pub fn load_render<T>(props: &LoadRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        LoadState::Pending => html! { <Loading text={props.loading_text.clone()} /> },
        LoadState::Failure(reason) => html! { <ErrorDisplay message={reason.clone()} /> },
        LoadState::Success(data) => props.render.emit(data.clone()),
    }
}
