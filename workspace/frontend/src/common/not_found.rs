use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundNoticeProps {
    pub title: String,
    pub message: String,
}

#[function_component(NotFoundNotice)]
pub fn not_found_notice(props: &NotFoundNoticeProps) -> Html {
    log::warn!("Displaying not-found notice to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-warning max-w-lg">
                <i class="fas fa-search text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{&props.title}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            <Link<Route> to={Route::Assets} classes="btn btn-primary btn-sm">
                {"Back to assets"}
            </Link<Route>>
        </div>
    }
}
