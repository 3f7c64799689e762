use advent_core::DoorState;
use yew::prelude::*;

const LOCK_ICON: &str = "\u{1F512}";
const GIFT_ICON: &str = "\u{1F381}";

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub door: DoorState,
    #[prop_or_default]
    pub shaking: bool,
    #[prop_or_default]
    pub bouncing: bool,
    #[prop_or_default]
    pub entrance_delay_ms: u64,
    pub on_activate: Callback<u8>,
}

#[function_component(Door)]
pub fn door(props: &Props) -> Html {
    let door = props.door;
    let classes = classes!(
        "calendar-door",
        "door-entrance",
        if door.locked { "locked" } else { "unlocked" },
        door.shows_open().then_some("open"),
        props.shaking.then_some("shake"),
        props.bouncing.then_some("bounce"),
    );

    let onclick = {
        let cb = props.on_activate.clone();
        let day = door.day;
        Callback::from(move |_: MouseEvent| cb.emit(day))
    };
    let onkeydown = {
        let cb = props.on_activate.clone();
        let day = door.day;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cb.emit(day);
            }
        })
    };

    let label = if door.locked {
        format!("Day {} (locked)", door.day)
    } else if door.opened {
        format!("Day {} (opened)", door.day)
    } else {
        format!("Day {}", door.day)
    };

    html! {
        <div
            class={classes}
            data-day={door.day.to_string()}
            role="button"
            tabindex="0"
            aria-label={label}
            aria-disabled={door.locked.to_string()}
            style={format!("animation-delay: {}ms", props.entrance_delay_ms)}
            {onclick}
            {onkeydown}
        >
            <div class="door-inner">
                <div class="door-front">
                    <span>{ door.day.to_string() }</span>
                    <div class="lock-icon">{ if door.locked { LOCK_ICON } else { GIFT_ICON } }</div>
                </div>
                <div class="door-back">
                    <span>{ GIFT_ICON }</span>
                </div>
            </div>
        </div>
    }
}
