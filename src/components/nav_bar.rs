//! Navigation Bar Component
//!
//! Site header with brand, section links and the mobile hamburger
//! toggle. Menu visibility and aria-expanded both derive from one
//! MenuState signal.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::menu::MenuState;

/// Close the menu on any click that lands outside both the trigger
/// and the menu itself. Listener stays bound for the page lifetime.
fn bind_outside_click(
    menu: ReadSignal<MenuState>,
    set_menu: WriteSignal<MenuState>,
    trigger_ref: NodeRef<html::Button>,
    menu_ref: NodeRef<html::Ul>,
) {
    use wasm_bindgen::closure::Closure;

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !menu.get_untracked().is_open() {
            return;
        }
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let Some(target) = target else { return };

        let inside_trigger = trigger_ref
            .get_untracked()
            .is_some_and(|el| el.contains(Some(&target)));
        let inside_menu = menu_ref
            .get_untracked()
            .is_some_and(|el| el.contains(Some(&target)));

        if !inside_trigger && !inside_menu {
            set_menu.update(|m| m.close());
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}

#[component]
pub fn NavBar() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let trigger_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Ul>::new();

    bind_outside_click(menu, set_menu, trigger_ref, menu_ref);

    // In-page navigation: the menu should never stay open after
    // following a link
    let close_on_link = move |_| set_menu.update(|m| m.close());

    let nav_link = move |href: &'static str, label: &'static str| {
        view! {
            <li><a href=href on:click=close_on_link>{label}</a></li>
        }
    };

    view! {
        <header class="nav-bar">
            <a class="nav-brand" href="#home">"Dan Phillips"</a>

            <button
                node_ref=trigger_ref
                class="hamburger"
                class:active=move || menu.get().is_open()
                aria-label="Toggle navigation"
                aria-controls="nav-menu"
                aria-expanded=move || menu.get().aria_expanded()
                on:click=move |_| set_menu.update(|m| m.toggle())
            >
                <span class="hamburger-line"></span>
                <span class="hamburger-line"></span>
                <span class="hamburger-line"></span>
            </button>

            <ul
                node_ref=menu_ref
                id="nav-menu"
                class="nav-menu"
                class:active=move || menu.get().is_open()
            >
                {nav_link("#home", "Home")}
                {nav_link("#projects", "Projects")}
                {nav_link("#certifications", "Certifications")}
                {nav_link("#contact", "Contact")}
            </ul>
        </header>
    }
}
