use advent_core::{DOOR_COUNT, Progress};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub progress: Progress,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &Props) -> Html {
    let progress = props.progress;
    html! {
        <section class="stats" aria-label="Calendar progress">
            <div class="stat">
                <span class="stat__label">{ "Days unlocked" }</span>
                <span id="daysUnlocked" class="stat__value">{ progress.unlocked_count.to_string() }</span>
            </div>
            <div class="stat">
                <span class="stat__label">{ "Doors opened" }</span>
                <span id="daysOpened" class="stat__value">{ progress.opened_count.to_string() }</span>
            </div>
            <div class="stat">
                <span class="stat__label">{ "Progress" }</span>
                <span id="progressPercentage" class="stat__value">{ format!("{}%", progress.percent_opened) }</span>
                <progress
                    class="stat__bar"
                    max={DOOR_COUNT.to_string()}
                    value={progress.opened_count.to_string()}
                />
            </div>
        </section>
    }
}
