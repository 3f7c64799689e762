use advent_core::{CalendarDate, DayRecord, DoorState, Progress};
use yew::prelude::*;

use super::date_banner::DateBanner;
use super::grid::CalendarGrid;
use super::modal::Modal;
use super::reward::RewardView;
use super::stats_bar::StatsBar;

/// Everything needed to draw the page, detached from the model that produced it.
#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub today: CalendarDate,
    pub season_year: i32,
    pub doors: Vec<DoorState>,
    pub progress: Progress,
    #[prop_or_default]
    pub revealed: Option<DayRecord>,
    #[prop_or_default]
    pub shaking: Option<u8>,
    #[prop_or_default]
    pub bouncing: Option<u8>,
    #[prop_or_default]
    pub stagger_ms: u32,
    pub on_activate: Callback<u8>,
    pub on_reset: Callback<()>,
    pub on_close_reward: Callback<()>,
}

#[function_component(CalendarView)]
pub fn calendar_view(props: &Props) -> Html {
    let title = props
        .revealed
        .as_ref()
        .map(|record| AttrValue::from(format!("Day {}", record.day)))
        .unwrap_or_default();

    html! {
        <main class="advent">
            <header class="advent__header">
                <h1>{ "Advent Calendar" }</h1>
                <DateBanner
                    today={props.today}
                    season_year={props.season_year}
                    on_reset={props.on_reset.clone()}
                />
            </header>
            <CalendarGrid
                doors={props.doors.clone()}
                shaking={props.shaking}
                bouncing={props.bouncing}
                stagger_ms={props.stagger_ms}
                on_activate={props.on_activate.clone()}
            />
            <StatsBar progress={props.progress} />
            <Modal
                open={props.revealed.is_some()}
                {title}
                on_close={props.on_close_reward.clone()}
            >
                { for props.revealed.iter().map(|record| html! { <RewardView record={record.clone()} /> }) }
            </Modal>
        </main>
    }
}
