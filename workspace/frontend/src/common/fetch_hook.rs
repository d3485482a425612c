use ::common::RequestGuard;
use std::future::Future;
use yew::prelude::*;

use crate::hooks::LoadState;

/// Runs `load_fn` once per mount and exposes its lifecycle.
#[hook]
pub fn use_load<T, F, Fut>(load_fn: F) -> UseStateHandle<LoadState<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    use_load_with((), move |_| load_fn())
}

/// Runs `load_fn` on mount and again whenever `deps` change.
///
/// A result that arrives after unmount, or after `deps` moved on, is
/// dropped instead of being written into the state.
#[hook]
pub fn use_load_with<D, T, F, Fut>(deps: D, load_fn: F) -> UseStateHandle<LoadState<T>>
where
    D: PartialEq + Clone + 'static,
    T: 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let load_state = use_state(|| LoadState::Pending);

    {
        let load_state = load_state.clone();
        use_effect_with(deps, move |deps| {
            let guard = RequestGuard::new();
            let token = guard.issue();
            let fut = load_fn(deps.clone());

            load_state.set(LoadState::Pending);
            wasm_bindgen_futures::spawn_local(async move {
                let result = fut.await;
                if token.is_cancelled() {
                    log::debug!("Discarding load result, screen moved on");
                    return;
                }
                load_state.set(result.into());
            });

            move || guard.cancel_all()
        });
    }

    load_state
}
