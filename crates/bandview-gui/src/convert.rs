use bandview_core::display::DisplayImage;

/// Convert display pixels (straight RGBA) to an egui ColorImage.
pub fn display_to_color_image(image: &DisplayImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba)
}
