use yew::prelude::*;
use super::header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="root-wrap min-h-screen bg-base-200">
            <Header />
            <main class="page-container p-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
