use crate::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                <span class="sidebar-logo">{"🏦"}</span>
                <span class="sidebar-title">{"Banking Dashboard"}</span>
            </div>
            <ul class="sidebar-nav">
                {for Page::ALL.iter().map(|page| {
                    let on_navigate = props.on_navigate.clone();
                    let target = *page;
                    let class = if props.current == target {
                        "sidebar-link active"
                    } else {
                        "sidebar-link"
                    };
                    html! {
                        <li>
                            <button
                                class={class}
                                onclick={Callback::from(move |_| on_navigate.emit(target))}
                            >
                                {page.label()}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
