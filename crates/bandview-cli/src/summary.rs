use bandview_core::raster::Raster;
use bandview_core::selection::BandSelection;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_raster_summary(raster: &Raster, source: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Raster"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(6)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Source"), s.path.apply_to(source));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", raster.width(), raster.height()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Bands"),
        s.value.apply_to(raster.band_count())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Default view"),
        s.value.apply_to(BandSelection::initial(raster.band_count()))
    );
    println!();

    println!("  {}", s.header.apply_to("Value range"));
    for band in 0..raster.band_count() {
        let view = raster.band(band);
        let low = view.iter().copied().fold(f32::INFINITY, f32::min);
        let high = view.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("Band {band}")),
            s.value.apply_to(format!("{low:.4} .. {high:.4}"))
        );
    }
    println!();
}
