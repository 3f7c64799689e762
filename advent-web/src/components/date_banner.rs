use advent_core::CalendarDate;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub today: CalendarDate,
    pub season_year: i32,
    pub on_reset: Callback<()>,
}

#[function_component(DateBanner)]
pub fn date_banner(props: &Props) -> Html {
    let on_reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="date-banner">
            <p id="dateDisplay">{ format!("Today is: {}, {}", props.today.label(), props.season_year) }</p>
            <button type="button" id="resetBtn" class="reset-btn" onclick={on_reset}>
                { "Reset calendar" }
            </button>
        </div>
    }
}
