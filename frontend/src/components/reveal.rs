use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// When an element counts as scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    /// Fraction of the viewport height the element's top has to cross.
    pub start: f64,
    /// Hide again once the element drops back below the trigger line.
    pub reverse: bool,
}

impl RevealTrigger {
    pub const fn once(start: f64) -> Self {
        Self { start, reverse: false }
    }

    pub const fn reversible(start: f64) -> Self {
        Self { start, reverse: true }
    }

    pub fn next_state(&self, visible: bool, element_top: f64, viewport_height: f64) -> bool {
        let crossed = element_top <= self.start * viewport_height;
        if crossed {
            true
        } else if self.reverse {
            false
        } else {
            visible
        }
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::reversible(0.8)
    }
}

fn measure(node: &NodeRef) -> Option<(f64, f64)> {
    let element = node.cast::<Element>()?;
    let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
    Some((element.get_bounding_client_rect().top(), viewport))
}

/// Tracks whether `node` has scrolled into view according to `trigger`.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: RevealTrigger) -> bool {
    let visible = use_state(|| false);
    let current = use_mut_ref(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |trigger| {
                let trigger = *trigger;
                let check = Closure::wrap(Box::new(move || {
                    if let Some((top, viewport)) = measure(&node) {
                        let mut current = current.borrow_mut();
                        let next = trigger.next_state(*current, top, viewport);
                        if next != *current {
                            *current = next;
                            visible.set(next);
                        }
                    }
                }) as Box<dyn FnMut()>);

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                }
                // elements already on screen at mount reveal right away
                let _ = check.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                    }
                }
            },
            trigger,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that picks up the `revealed` class when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.trigger);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), revealed.then(|| "revealed"))}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_when_top_crosses_line() {
        let t = RevealTrigger::once(0.8);
        assert!(!t.next_state(false, 900.0, 1000.0));
        assert!(t.next_state(false, 800.0, 1000.0));
        assert!(t.next_state(false, -200.0, 1000.0));
    }

    #[test]
    fn one_shot_trigger_stays_revealed() {
        let t = RevealTrigger::once(0.8);
        assert!(t.next_state(true, 950.0, 1000.0));
    }

    #[test]
    fn reversible_trigger_hides_again() {
        let t = RevealTrigger::reversible(0.8);
        let shown = t.next_state(false, 500.0, 1000.0);
        assert!(shown);
        assert!(!t.next_state(shown, 950.0, 1000.0));
    }

    #[test]
    fn default_is_top_eighty_percent_reversible() {
        assert_eq!(RevealTrigger::default(), RevealTrigger { start: 0.8, reverse: true });
    }
}
