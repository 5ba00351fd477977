use yew::prelude::*;

#[function_component(MyPage)]
pub fn my_page() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title text-2xl">{"My Page"}</h2>
                <p class="text-gray-500">{"Account details are not available yet."}</p>
            </div>
        </div>
    }
}
