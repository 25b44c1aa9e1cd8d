use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_interval;

/// Slide position of a looping carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => next.go_to(index),
        }
        next.into()
    }
}

/// Whether a pausable carousel should advance on its own.
/// Hovering pauses it; manual navigation stops it for good.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Autoplay {
    hovered: bool,
    stopped: bool,
}

impl Autoplay {
    pub fn hover(self, hovered: bool) -> Self {
        Autoplay { hovered, ..self }
    }

    pub fn stop(self) -> Self {
        Autoplay { stopped: true, ..self }
    }

    pub fn running(&self) -> bool {
        !self.hovered && !self.stopped
    }
}

/// Carousel state that advances on its own every `delay_ms` while `running`.
#[hook]
pub fn use_carousel(len: usize, delay_ms: u32, running: bool) -> UseReducerHandle<Carousel> {
    let carousel = use_reducer(move || Carousel::new(len));

    {
        let carousel = carousel.clone();
        // an interval of 0 ms keeps the timer stopped
        use_interval(
            move || carousel.dispatch(CarouselAction::Next),
            if running { delay_ms } else { 0 },
        );
    }

    carousel
}

#[derive(Properties, PartialEq)]
pub struct CarouselControlsProps {
    pub index: usize,
    pub len: usize,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_select: Callback<usize>,
}

#[function_component(CarouselControls)]
pub fn carousel_controls(props: &CarouselControlsProps) -> Html {
    html! {
        <>
            <button class="carousel-arrow carousel-prev" onclick={props.on_prev.clone()}>{"‹"}</button>
            <button class="carousel-arrow carousel-next" onclick={props.on_next.clone()}>{"›"}</button>
            <div class="carousel-dots">
                { for (0..props.len).map(|i| {
                    let on_select = props.on_select.clone();
                    html! {
                        <button
                            class={classes!("carousel-dot", (i == props.index).then(|| "active"))}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(i))}
                        />
                    }
                })}
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_by_one_and_wraps() {
        let mut c = Carousel::new(3);
        c.next();
        assert_eq!(c.index(), 1);
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn prev_wraps_to_last_slide() {
        let mut c = Carousel::new(5);
        c.prev();
        assert_eq!(c.index(), 4);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(3);
        c.go_to(2);
        assert_eq!(c.index(), 2);
        c.go_to(3);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.go_to(0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.len(), 0);
    }

    #[test]
    fn autoplay_pauses_on_hover_and_resumes_on_leave() {
        let autoplay = Autoplay::default();
        assert!(autoplay.running());
        let hovered = autoplay.hover(true);
        assert!(!hovered.running());
        assert!(hovered.hover(false).running());
    }

    #[test]
    fn manual_navigation_stops_autoplay_for_good() {
        let stopped = Autoplay::default().hover(true).stop();
        assert!(!stopped.running());
        assert!(!stopped.hover(false).running());
        assert!(!stopped.hover(true).hover(false).running());
    }

    #[test]
    fn reducer_applies_actions() {
        let c = Rc::new(Carousel::new(3));
        let c = c.reduce(CarouselAction::Prev);
        assert_eq!(c.index(), 2);
        let c = c.reduce(CarouselAction::Next);
        assert_eq!(c.index(), 0);
        let c = c.reduce(CarouselAction::GoTo(1));
        assert_eq!(c.index(), 1);
    }
}
