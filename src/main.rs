//! Renders every sample screen headlessly and logs the arranged frame
//! trees. `RUST_LOG=debug` shows per-image load diagnostics too.

use ripple::layout::Size;
use ripple::preview::Preview;
use ripple::screens::{anchors, cards, chips, feed, lists};
use ripple::theme::Theme;
use tracing::info;
use tracing_subscriber::EnvFilter;

const VIEWPORT: Size = Size::new(360, 800);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let theme = Theme::light();
    let preview = Preview::new();

    let feed_state = feed::FeedState::new();
    let lists_state = lists::ListsState::new();

    let screens = [
        (
            "feed",
            preview.render(feed::screen(&feed_state, &theme, |_| {}), VIEWPORT),
        ),
        (
            "lists",
            preview.render(lists::screen(&lists_state, &theme, |_| {}), VIEWPORT),
        ),
        ("cards", preview.render(cards::screen(&theme), VIEWPORT)),
        ("chips", preview.render(chips::screen(), VIEWPORT)),
        (
            "chips/flow-column",
            preview.render(chips::flow_column_demo(), VIEWPORT),
        ),
        (
            "chips/baseline",
            preview.render(chips::baseline_demo(), VIEWPORT),
        ),
        (
            "lists/simple",
            preview.render(lists::simple_list(&theme), VIEWPORT),
        ),
        ("anchors", preview.render(anchors::screen(VIEWPORT), VIEWPORT)),
        (
            "anchors/barrier",
            preview.render(anchors::barrier_content(), VIEWPORT),
        ),
        (
            "anchors/guideline",
            preview.render(anchors::guideline_content(), VIEWPORT),
        ),
    ];

    for (name, tree) in screens {
        info!(screen = name, "arranged at {}x{}", VIEWPORT.width, VIEWPORT.height);
        println!("── {name} ──\n{tree}");
    }
}
