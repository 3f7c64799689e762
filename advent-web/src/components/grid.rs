use advent_core::DoorState;
use yew::prelude::*;

use super::door::Door;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub doors: Vec<DoorState>,
    #[prop_or_default]
    pub shaking: Option<u8>,
    #[prop_or_default]
    pub bouncing: Option<u8>,
    #[prop_or_default]
    pub stagger_ms: u32,
    pub on_activate: Callback<u8>,
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &Props) -> Html {
    html! {
        <div id="calendarGrid" class="calendar-grid">
            { for props.doors.iter().enumerate().map(|(index, door)| {
                let delay = (index as u64).saturating_mul(u64::from(props.stagger_ms));
                html! {
                    <Door
                        key={door.day.to_string()}
                        door={*door}
                        shaking={props.shaking == Some(door.day)}
                        bouncing={props.bouncing == Some(door.day)}
                        entrance_delay_ms={delay}
                        on_activate={props.on_activate.clone()}
                    />
                }
            }) }
        </div>
    }
}
