use yew::prelude::*;

/// Picking the open item again closes it, picking another one switches to it.
pub fn toggle<T: PartialEq>(current: Option<T>, id: T) -> Option<T> {
    match current {
        Some(open) if open == id => None,
        _ => Some(id),
    }
}

/// Single-open accordion state shared by the job, service, project and leader cards.
#[hook]
pub fn use_expanded<T>() -> (Option<T>, Callback<T>)
where
    T: Clone + PartialEq + 'static,
{
    let expanded = use_state(|| None::<T>);
    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: T| {
            expanded.set(toggle((*expanded).clone(), id));
        })
    };
    ((*expanded).clone(), on_toggle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_item_twice_collapses() {
        let open = toggle(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle(open, 2), None);
    }

    #[test]
    fn other_item_switches() {
        let open = toggle(None, 1);
        let open = toggle(open, 3);
        assert_eq!(open, Some(3));
        assert_eq!(toggle(open, 1), Some(1));
    }
}
