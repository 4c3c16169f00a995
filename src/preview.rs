//! Headless preview harness.
//!
//! Resolves a screen's view tree to native leaves, measures them with
//! deterministic metrics, runs the arrangers, and returns a [`PreviewNode`]
//! tree of labelled frames. This stands in for the host's measurement and
//! placement phases so screen geometry can be inspected and tested without
//! a backend.
//!
//! Text extents use a monospace-style estimate (display cells times a
//! size-derived advance); real shaping is the host's business, but the
//! estimate is stable, which is what layout tests need.

use std::fmt;

use ripple_controls::{Button, Toggle};
use ripple_core::layout::{Constraints, Layout, Rect, Size, StretchAxis, SubView};
use ripple_core::{AnyView, Environment, Native, View};
use ripple_layout::scroll::Axis;
use ripple_layout::{FixedContainer, ScrollView, Spacer};
use ripple_list::LazyColumn;
use ripple_media::RemoteImage;
use ripple_text::{Text, TextConfig};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::widget::{Divider, Surface, SurfaceStyle};

/// Horizontal chrome inside a button, per side.
const BUTTON_PAD_X: u32 = 12;
/// Vertical chrome inside a button, per side.
const BUTTON_PAD_Y: u32 = 8;
/// Switch dimensions and label gap of a toggle.
const SWITCH_SIZE: Size = Size::new(36, 20);
const TOGGLE_GAP: u32 = 8;

/// Body-call limit per view before resolution gives up.
const MAX_RESOLUTION_DEPTH: usize = 64;

// ============================================================================
// PreviewNode
// ============================================================================

/// One arranged box in a preview: a label, an absolute frame, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewNode {
    /// Human-readable node label (type plus a content hint).
    pub label: String,
    /// Absolute frame within the preview viewport.
    pub frame: Rect,
    /// Arranged children.
    pub children: Vec<PreviewNode>,
}

impl PreviewNode {
    /// All nodes in pre-order, starting with `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Self> {
        let mut nodes = vec![self];
        let mut cursor = 0;
        while cursor < nodes.len() {
            let node = nodes[cursor];
            nodes.extend(node.children.iter());
            cursor += 1;
        }
        nodes
    }

    /// The first node (pre-order) whose label contains `needle`.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<&Self> {
        self.descendants()
            .into_iter()
            .find(|node| node.label.contains(needle))
    }

    /// How many nodes' labels contain `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.descendants()
            .iter()
            .filter(|node| node.label.contains(needle))
            .count()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{} [{}, {} {}x{}]",
            "",
            self.label,
            self.frame.x(),
            self.frame.y(),
            self.frame.width(),
            self.frame.height(),
            indent = depth * 2
        )?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for PreviewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

// ============================================================================
// Element - resolved native tree
// ============================================================================

enum Element {
    Empty,
    Text(Text),
    Image(RemoteImage),
    Button { label: Box<Element> },
    Toggle { label: Box<Element> },
    Spacer,
    Divider(Divider),
    Surface {
        style: SurfaceStyle,
        child: Option<Box<Element>>,
    },
    Container {
        layout: Box<dyn Layout>,
        children: Vec<Element>,
    },
    Scroll {
        axis: Axis,
        content: Box<Element>,
    },
    Lazy(LazyColumn),
}

impl Element {
    fn measure(&self, constraints: Constraints) -> Size {
        match self {
            Self::Empty | Self::Spacer => constraints.constrain(Size::zero()),
            Self::Text(text) => text_size(text.config(), constraints),
            Self::Image(_) => constraints.constrain(fill_size(constraints)),
            Self::Button { label } => {
                let label_size = label.measure(constraints.loosen());
                constraints.constrain(Size::new(
                    label_size.width + 2 * BUTTON_PAD_X,
                    label_size.height + 2 * BUTTON_PAD_Y,
                ))
            }
            Self::Toggle { label } => {
                let label_size = label.measure(constraints.loosen());
                constraints.constrain(Size::new(
                    label_size.width + TOGGLE_GAP + SWITCH_SIZE.width,
                    label_size.height.max(SWITCH_SIZE.height),
                ))
            }
            Self::Divider(divider) => {
                constraints.constrain(Size::new(divider.thickness, divider.thickness))
            }
            Self::Surface { child, .. } => child.as_ref().map_or_else(
                || constraints.constrain(Size::zero()),
                |child| child.measure(constraints),
            ),
            Self::Container { layout, children } => {
                let proxies: Vec<ElementChild<'_>> = children.iter().map(ElementChild).collect();
                let refs: Vec<&dyn SubView> = proxies
                    .iter()
                    .map(|proxy| proxy as &dyn SubView)
                    .collect();
                layout.measure(constraints, &refs)
            }
            Self::Scroll { axis, content } => {
                let inner = match axis {
                    Axis::Horizontal => constraints.with_unbounded_width(),
                    Axis::Vertical => constraints.with_unbounded_height(),
                    Axis::All => Constraints::unbounded(),
                    _ => Constraints::unbounded(),
                };
                constraints.constrain(content.measure(inner))
            }
            Self::Lazy(column) => {
                let width = if constraints.has_bounded_width() {
                    constraints.max_width
                } else {
                    0
                };
                constraints.constrain(Size::new(width, column.content_height()))
            }
        }
    }

    fn stretch_axis(&self) -> StretchAxis {
        match self {
            Self::Image(_) => StretchAxis::Both,
            Self::Spacer => StretchAxis::MainAxis,
            Self::Divider(_) => StretchAxis::CrossAxis,
            Self::Lazy(_) => StretchAxis::Vertical,
            Self::Container { layout, .. } => layout.stretch_axis(),
            _ => StretchAxis::None,
        }
    }

    fn baseline(&self) -> Option<u32> {
        match self {
            Self::Text(text) => Some(text_baseline(text.config())),
            _ => None,
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Empty => "Empty".into(),
            Self::Text(text) => {
                let content = text.config().content.as_str();
                let shown: String = content.chars().take(40).collect();
                if shown.len() < content.len() {
                    format!("Text(\"{shown}…\")")
                } else {
                    format!("Text(\"{shown}\")")
                }
            }
            Self::Image(image) => format!("RemoteImage({})", image.config().source),
            Self::Button { .. } => "Button".into(),
            Self::Toggle { .. } => "Toggle".into(),
            Self::Spacer => "Spacer".into(),
            Self::Divider(_) => "Divider".into(),
            Self::Surface { .. } => "Surface".into(),
            Self::Container { layout, .. } => format!("{layout:?}"),
            Self::Scroll { axis, .. } => format!("Scroll({axis:?})"),
            Self::Lazy(column) => format!("LazyColumn({})", column.count()),
        }
    }
}

/// SubView proxy over a resolved element.
struct ElementChild<'a>(&'a Element);

impl SubView for ElementChild<'_> {
    fn measure(&self, constraints: Constraints) -> Size {
        self.0.measure(constraints)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.0.stretch_axis()
    }

    fn baseline(&self) -> Option<u32> {
        self.0.baseline()
    }
}

// ============================================================================
// Text metrics
// ============================================================================

const fn advance_of(size: u32) -> u32 {
    let em = if size == 0 { 1 } else { size };
    let advance = em * 3 / 5;
    if advance == 0 { 1 } else { advance }
}

const fn line_height_of(size: u32) -> u32 {
    let em = if size == 0 { 1 } else { size };
    em + em / 4
}

#[allow(clippy::cast_possible_truncation)]
fn text_cells(content: &str) -> u32 {
    UnicodeWidthStr::width(content) as u32
}

/// Deterministic text extent estimate: cells x advance, wrapped line by
/// line under a bounded width, truncated by the line limit.
fn text_size(config: &TextConfig, constraints: Constraints) -> Size {
    let advance = advance_of(config.size);
    let line_height = line_height_of(config.size);
    let intrinsic = text_cells(&config.content) * advance;

    let (width, mut lines) =
        if constraints.has_bounded_width() && intrinsic > constraints.max_width {
            let columns = (constraints.max_width / advance).max(1);
            let lines = text_cells(&config.content).div_ceil(columns);
            (columns * advance, lines)
        } else {
            (intrinsic, 1)
        };

    if let Some(max_lines) = config.max_lines {
        lines = lines.min(max_lines.max(1));
    }

    constraints.constrain(Size::new(width, lines * line_height))
}

/// Estimated first-baseline distance from the box top.
fn text_baseline(config: &TextConfig) -> u32 {
    line_height_of(config.size) * 4 / 5
}

/// The extent a greedy leaf takes: the bounded maximum, or nothing.
const fn fill_size(constraints: Constraints) -> Size {
    Size::new(
        if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            0
        },
        if constraints.has_bounded_height() {
            constraints.max_height
        } else {
            0
        },
    )
}

// ============================================================================
// Preview
// ============================================================================

/// Headless renderer: resolve, measure, place, report.
#[derive(Debug)]
pub struct Preview {
    env: Environment,
}

impl Default for Preview {
    fn default() -> Self {
        Self::new()
    }
}

impl Preview {
    /// A preview with the default light theme in its environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            env: Environment::new().with(Theme::light()),
        }
    }

    /// A preview over a caller-supplied environment.
    #[must_use]
    pub const fn with_env(env: Environment) -> Self {
        Self { env }
    }

    /// Renders `view` into a full-viewport frame tree.
    pub fn render(&self, view: impl View, viewport: Size) -> PreviewNode {
        let element = self.resolve(AnyView::new(view));
        let size = element.measure(Constraints::tight(viewport));
        self.build(&element, Rect::from_size(size))
    }

    fn resolve(&self, view: AnyView) -> Element {
        let mut view = view;
        for _ in 0..MAX_RESOLUTION_DEPTH {
            match self.probe(view) {
                Ok(element) => return element,
                Err(unresolved) => view = unresolved.into_body(&self.env),
            }
        }
        warn!("view resolution exceeded its depth limit");
        Element::Empty
    }

    #[allow(clippy::too_many_lines)]
    fn probe(&self, view: AnyView) -> Result<Element, AnyView> {
        // Unwrap erased-in-erased nesting before probing concrete leaves.
        let mut view = view;
        loop {
            match view.downcast::<AnyView>() {
                Ok(inner) => view = inner,
                Err(original) => {
                    view = original;
                    break;
                }
            }
        }

        let view = match view.downcast::<()>() {
            Ok(()) => return Ok(Element::Empty),
            Err(view) => view,
        };
        let view = match view.downcast::<Native<()>>() {
            Ok(_) => return Ok(Element::Empty),
            Err(view) => view,
        };
        let view = match view.downcast::<Text>() {
            Ok(text) => return Ok(Element::Text(text)),
            Err(view) => view,
        };
        let view = match view.downcast::<RemoteImage>() {
            Ok(image) => return Ok(Element::Image(image)),
            Err(view) => view,
        };
        let view = match view.downcast::<Button>() {
            Ok(button) => {
                let config = button.into_config();
                return Ok(Element::Button {
                    label: Box::new(self.resolve(config.label)),
                });
            }
            Err(view) => view,
        };
        let view = match view.downcast::<Toggle>() {
            Ok(toggle) => {
                let config = toggle.into_config();
                return Ok(Element::Toggle {
                    label: Box::new(self.resolve(config.label)),
                });
            }
            Err(view) => view,
        };
        let view = match view.downcast::<Spacer>() {
            Ok(_) => return Ok(Element::Spacer),
            Err(view) => view,
        };
        let view = match view.downcast::<Divider>() {
            Ok(divider) => return Ok(Element::Divider(divider)),
            Err(view) => view,
        };
        let view = match view.downcast::<Surface>() {
            Ok(surface) => {
                let (style, content) = surface.into_inner();
                return Ok(Element::Surface {
                    style,
                    child: content.map(|content| Box::new(self.resolve(content))),
                });
            }
            Err(view) => view,
        };
        let view = match view.downcast::<FixedContainer>() {
            Ok(container) => {
                let (layout, children) = container.into_inner();
                return Ok(Element::Container {
                    layout,
                    children: children
                        .into_iter()
                        .map(|child| self.resolve(child))
                        .collect(),
                });
            }
            Err(view) => view,
        };
        let view = match view.downcast::<ScrollView>() {
            Ok(scroll) => {
                let (axis, content) = scroll.into_inner();
                return Ok(Element::Scroll {
                    axis,
                    content: Box::new(self.resolve(content)),
                });
            }
            Err(view) => view,
        };
        let view = match view.downcast::<LazyColumn>() {
            Ok(column) => return Ok(Element::Lazy(column)),
            Err(view) => view,
        };

        Err(view)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn build(&self, element: &Element, frame: Rect) -> PreviewNode {
        let children = match element {
            Element::Container { layout, children } => {
                let proxies: Vec<ElementChild<'_>> = children.iter().map(ElementChild).collect();
                let refs: Vec<&dyn SubView> = proxies
                    .iter()
                    .map(|proxy| proxy as &dyn SubView)
                    .collect();
                let rects = layout.place(frame, &refs);
                children
                    .iter()
                    .zip(rects)
                    .map(|(child, rect)| self.build(child, rect))
                    .collect()
            }
            Element::Scroll { axis, content } => {
                let inner = match axis {
                    Axis::Horizontal => {
                        Constraints::loose(frame.size()).with_unbounded_width()
                    }
                    Axis::Vertical => {
                        Constraints::loose(frame.size()).with_unbounded_height()
                    }
                    Axis::All => Constraints::unbounded(),
                    _ => Constraints::unbounded(),
                };
                let content_size = content.measure(inner);
                vec![self.build(content, Rect::new(frame.origin(), content_size))]
            }
            Element::Lazy(column) => column
                .window(frame.size())
                .into_iter()
                .map(|(index, rect)| {
                    let row = self.resolve(column.build(index));
                    self.build(&row, rect.translated(frame.x(), frame.y()))
                })
                .collect(),
            Element::Button { label } => {
                let label_size = label.measure(Constraints::unbounded());
                vec![self.build(
                    label,
                    Rect::new(
                        frame
                            .origin()
                            .offset(BUTTON_PAD_X as i32, BUTTON_PAD_Y as i32),
                        label_size,
                    ),
                )]
            }
            Element::Toggle { label } => {
                let label_size = label.measure(Constraints::unbounded());
                vec![self.build(label, Rect::new(frame.origin(), label_size))]
            }
            Element::Surface {
                child: Some(child), ..
            } => vec![self.build(child, frame)],
            _ => vec![],
        };

        PreviewNode {
            label: element.label(),
            frame,
            children,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::{anchors, cards, chips, feed, lists};
    use crate::theme::Theme;

    const PHONE: Size = Size::new(360, 800);

    fn preview() -> Preview {
        Preview::new()
    }

    #[test]
    fn chip_grid_cycles_nineteen_chips_through_three_rows() {
        let tree = preview().render(chips::screen(), PHONE);

        let grid = tree
            .find("CycleGridLayout")
            .expect("chip grid is in the tree");
        assert_eq!(grid.children.len(), chips::TOPICS.len());

        // Children cycle through three distinct row tops.
        let mut tops: Vec<i32> = grid.children.iter().map(|c| c.frame.y()).collect();
        tops.sort_unstable();
        tops.dedup();
        assert_eq!(tops.len(), 3);

        // Chips 0 and 3 share row 0; chip 3 sits to the right of chip 0.
        assert_eq!(grid.children[0].frame.y(), grid.children[3].frame.y());
        assert!(grid.children[3].frame.x() >= grid.children[0].frame.max_x());
    }

    #[test]
    fn chip_grid_scrolls_horizontally_past_the_viewport() {
        let tree = preview().render(chips::screen(), PHONE);
        let scroll = tree.find("Scroll(Horizontal)").expect("scroller");
        let grid = scroll.find("CycleGridLayout").expect("grid");
        assert!(grid.frame.width() > PHONE.width);
    }

    #[test]
    fn baseline_demo_aligns_glyphs_not_boxes() {
        let tree = preview().render(chips::baseline_demo(), PHONE);
        assert_eq!(tree.count("Text"), 2);

        // The padded copy's glyphs start exactly 32dp below its box top.
        let padded = tree.find("PaddingLayout").expect("padded wrapper");
        let padded_text = padded.children.first().expect("inner text");
        assert_eq!(padded_text.frame.y() - padded.frame.y(), 32);

        // The baseline-pinned copy starts higher than 32dp inside its box:
        // its baseline, not its top, sits at the 32dp mark.
        let pinned = tree.find("BaselineLayout").expect("baseline wrapper");
        let pinned_text = pinned.children.first().expect("inner text");
        let offset = pinned_text.frame.y() - pinned.frame.y();
        assert!(offset > 0);
        assert!(offset < 32);
    }

    #[test]
    fn feed_counter_reflects_state_and_threshold() {
        let theme = Theme::light();
        let mut state = feed::FeedState::new();
        for _ in 0..6 {
            state.update(feed::FeedEvent::CounterClicked);
        }

        let tree = preview().render(feed::screen(&state, &theme, |_| {}), PHONE);
        let button = tree.find("Button").expect("counter button");
        assert!(
            button
                .find("clicked 6 times")
                .is_some(),
            "label shows the click count"
        );
    }

    #[test]
    fn feed_windows_its_thousand_rows() {
        let theme = Theme::light();
        let state = feed::FeedState::new();
        let tree = preview().render(feed::screen(&state, &theme, |_| {}), PHONE);

        let lazy = tree.find("LazyColumn(1000)").expect("greeting list");
        assert!(!lazy.children.is_empty());
        assert!(lazy.children.len() < 20, "only the window is materialised");
    }

    #[test]
    fn lists_screen_jumps_move_the_window() {
        let theme = Theme::light();
        let mut state = lists::ListsState::new();
        let before = preview().render(lists::screen(&state, &theme, |_| {}), PHONE);
        let lazy = before.find("LazyColumn").expect("list");
        assert!(lazy.children[0].find("Item #0").is_some());

        state.update(lists::ListsEvent::ScrollToBottom, 700);
        let after = preview().render(lists::screen(&state, &theme, |_| {}), PHONE);
        let lazy = after.find("LazyColumn").expect("list");
        let last = lazy.children.last().expect("rows visible");
        // The final row of 100 is now inside the window.
        assert!(last.find("Item #99").is_some());
    }

    #[test]
    fn two_texts_split_equally_around_a_full_height_divider() {
        let theme = Theme::light();
        let tree = preview().render(cards::two_texts("Hi", "there", &theme), PHONE);

        let divider = tree.find("Divider").expect("divider");
        let row_height = tree.frame.height();
        assert_eq!(divider.frame.height(), row_height);
        assert_eq!(divider.frame.width(), 1);

        let texts: Vec<_> = tree
            .descendants()
            .into_iter()
            .filter(|node| node.label.contains("PaddingLayout"))
            .collect();
        assert_eq!(texts.len(), 2);
        // Equal weights: widths differ by at most the integer remainder.
        let diff = i64::from(texts[0].frame.width()) - i64::from(texts[1].frame.width());
        assert!(diff.abs() <= 1);
    }

    #[test]
    fn anchors_margins_decouple_by_aspect() {
        let portrait = preview().render(anchors::screen(Size::new(360, 800)), Size::new(360, 800));
        let landscape = preview().render(anchors::screen(Size::new(800, 360)), Size::new(800, 360));

        let portrait_button = portrait.find("Button").expect("button");
        let landscape_button = landscape.find("Button").expect("button");
        assert_eq!(portrait_button.frame.y(), 32);
        assert_eq!(landscape_button.frame.y(), 16);
    }

    #[test]
    fn anchor_barrier_pushes_second_button_right() {
        let tree = preview().render(anchors::barrier_content(), PHONE);
        let buttons: Vec<_> = tree
            .descendants()
            .into_iter()
            .filter(|node| node.label == "Button")
            .collect();
        assert_eq!(buttons.len(), 2);
        // The second button starts past everything before the barrier.
        assert!(buttons[1].frame.x() >= buttons[0].frame.max_x());
        assert_eq!(buttons[1].frame.y(), 16);
    }

    #[test]
    fn flow_column_stacks_lines_at_the_leading_edge() {
        let tree = preview().render(chips::flow_column_demo(), PHONE);
        let column = tree.find("FlowColumnLayout").expect("flow column");
        assert_eq!(column.children.len(), 4);

        let mut last_bottom = 0;
        for child in &column.children {
            assert_eq!(child.frame.x(), 0);
            assert_eq!(child.frame.y(), last_bottom);
            last_bottom = child.frame.max_y();
        }
    }

    #[test]
    fn guideline_text_sits_in_the_trailing_half() {
        let tree = preview().render(anchors::guideline_content(), PHONE);
        let text = tree.find("Text").expect("long text");
        // Anchored between the midline guideline and the parent end.
        assert!(text.frame.x() >= i32::try_from(PHONE.width / 2).unwrap() - 1);
        assert!(text.frame.max_x() <= i32::try_from(PHONE.width).unwrap());
    }

    #[test]
    fn simple_list_materialises_every_row_eagerly() {
        let theme = Theme::light();
        let tree = preview().render(lists::simple_list(&theme), PHONE);
        let scroll = tree.find("Scroll(Vertical)").expect("scroller");
        assert_eq!(scroll.count("Item #"), lists::LIST_SIZE);
        // Content is taller than the clipped scroll frame.
        let content = scroll.children.first().expect("content");
        assert!(content.frame.height() > scroll.frame.height());
    }

    #[test]
    fn render_fills_the_viewport() {
        let theme = Theme::light();
        let state = feed::FeedState::new();
        let tree = preview().render(feed::screen(&state, &theme, |_| {}), PHONE);
        assert_eq!(tree.frame.size(), PHONE);
    }

    #[test]
    fn preview_is_deterministic() {
        let first = preview().render(chips::screen(), PHONE);
        let second = preview().render(chips::screen(), PHONE);
        assert_eq!(first, second);
    }
}
