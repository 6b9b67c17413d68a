use console::Style;
use twinview_core::frame::ImageSize;
use twinview_core::view::{Placement, ViewerState, ViewportSize};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    mode: Style,
    warn: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            warn: Style::new().dim().yellow(),
        }
    }
}

pub fn print_placement_summary(
    label: &str,
    image: ImageSize,
    viewport: ViewportSize,
    state: &ViewerState,
    placement: &Placement,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(label));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(label.chars().count().max(8))));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Image"), s.value.apply_to(image));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}x{}", viewport.width, viewport.height))
    );
    let mode = if state.zoom_to_fit {
        "fit".to_string()
    } else {
        format!("level {}", state.zoom_level)
    };
    println!("  {:<14}{}", s.label.apply_to("Mode"), s.mode.apply_to(mode));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4} ({:.0}%)", placement.scale, placement.scale * 100.0))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Origin"),
        s.value.apply_to(format!("({:.1}, {:.1})", placement.origin_x, placement.origin_y))
    );

    let rect = placement.image_rect(image);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Drawn"),
        s.value.apply_to(format!("{:.1}x{:.1}", rect.width(), rect.height()))
    );

    if rect.width() > viewport.width || rect.height() > viewport.height {
        println!(
            "  {:<14}{}",
            s.label.apply_to(""),
            s.warn.apply_to("image overflows the viewport (clipped)")
        );
    }
    println!();
}
