use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::reveal::{use_reveal, RevealTrigger};
use crate::content::Stat;

const TICK_MS: u32 = 30;
const COUNT_DURATION_MS: u32 = 2500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub end: u64,
    pub duration_ms: u32,
}

impl CountUp {
    pub fn new(end: u64, duration_ms: u32) -> Self {
        Self { end, duration_ms }
    }

    pub fn is_done(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Value shown `elapsed_ms` into the animation, eased out exponentially.
    pub fn value_at(&self, elapsed_ms: u32) -> u64 {
        if self.duration_ms == 0 || self.is_done(elapsed_ms) {
            return self.end;
        }
        let progress = elapsed_ms as f64 / self.duration_ms as f64;
        let eased = 1.0 - 2f64.powf(-10.0 * progress);
        ((self.end as f64) * eased).floor().min(self.end as f64) as u64
    }
}

/// Groups digits by thousands, e.g. `200000` -> `"200,000"`.
pub fn format_with_separator(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub stats: &'static [Stat],
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Stat cards that count up once, the first time the grid scrolls into view.
#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealTrigger::once(0.7));
    let elapsed = use_state(|| 0u32);
    let ticks = use_mut_ref(|| 0u32);

    let running = revealed && *elapsed < COUNT_DURATION_MS;
    {
        let elapsed = elapsed.clone();
        use_interval(
            move || {
                let mut ticks = ticks.borrow_mut();
                *ticks = ticks.saturating_add(TICK_MS).min(COUNT_DURATION_MS);
                elapsed.set(*ticks);
            },
            if running { TICK_MS } else { 0 },
        );
    }

    html! {
        <section ref={node} class={classes!("stats-section", revealed.then(|| "revealed"))}>
            if let Some(title) = &props.title {
                <h2 class="stats-title">{title.clone()}</h2>
            }
            if let Some(subtitle) = &props.subtitle {
                <p class="stats-subtitle">{subtitle.clone()}</p>
            }
            <div class="stats-grid">
                { for props.stats.iter().map(|stat| {
                    let count = CountUp::new(stat.number, COUNT_DURATION_MS);
                    html! {
                        <div class="stat-card" key={stat.label}>
                            <div class="stat-number">
                                {format_with_separator(count.value_at(*elapsed), ',')}
                                {stat.suffix}
                            </div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_end() {
        let c = CountUp::new(200_000, 2500);
        assert_eq!(c.value_at(0), 0);
        assert_eq!(c.value_at(2500), 200_000);
        assert_eq!(c.value_at(10_000), 200_000);
    }

    #[test]
    fn never_counts_backwards_or_overshoots() {
        let c = CountUp::new(40_000, 2500);
        let mut last = 0;
        for t in (0..=2500).step_by(30) {
            let v = c.value_at(t);
            assert!(v >= last);
            assert!(v <= 40_000);
            last = v;
        }
    }

    #[test]
    fn zero_duration_shows_end() {
        assert_eq!(CountUp::new(15, 0).value_at(0), 15);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_with_separator(0, ','), "0");
        assert_eq!(format_with_separator(15, ','), "15");
        assert_eq!(format_with_separator(500, ','), "500");
        assert_eq!(format_with_separator(40_000, ','), "40,000");
        assert_eq!(format_with_separator(200_000, ','), "200,000");
        assert_eq!(format_with_separator(1_234_567, ','), "1,234,567");
    }
}
