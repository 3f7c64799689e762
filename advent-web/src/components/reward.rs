use advent_core::{DayRecord, RewardKind};
use yew::prelude::*;

use crate::paths::reward_src;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub record: DayRecord,
}

#[function_component(RewardView)]
pub fn reward_view(props: &Props) -> Html {
    let record = &props.record;
    let src = reward_src(&record.reward.src);
    let media = match record.reward.kind {
        RewardKind::Image => html! {
            <img id="modalImage" class="reward__media" src={src} alt={format!("Surprise Day {}", record.day)} />
        },
        RewardKind::Video => html! {
            <video
                id="modalVideo"
                class="reward__media"
                src={src}
                controls="controls"
                autoplay="autoplay"
                playsinline="playsinline"
            />
        },
    };
    html! {
        <figure class="reward">
            { media }
            <figcaption id="modalQuote" class="reward__quote">{ record.text.clone() }</figcaption>
        </figure>
    }
}
