//! Browser DOM side effects used after re-renders.
//!
//! Requires a browser environment; SSR and test builds no-op.

use leptos::html::Div;
use leptos::prelude::*;

use super::transition::ScrollBehavior;

/// Scroll the element behind `node` into view at the bottom of its container.
pub fn scroll_into_view(node: NodeRef<Div>, behavior: ScrollBehavior) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        match behavior {
            ScrollBehavior::Smooth => options.set_behavior(web_sys::ScrollBehavior::Smooth),
        }
        options.set_block(web_sys::ScrollLogicalPosition::End);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, behavior);
    }
}
