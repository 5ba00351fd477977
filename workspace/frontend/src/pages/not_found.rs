use yew::prelude::*;

use crate::common::not_found::NotFoundNotice;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <NotFoundNotice title="404 Not Found" message="The page you are looking for does not exist." />
    }
}
