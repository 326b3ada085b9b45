//! Main window: background, file form and status line

use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;
use egui::{Color32, RichText};

use dna_analysis_gui::background::{BackgroundImage, ResizeDebounce, FALLBACK_COLOR};
use dna_analysis_gui::config::{app_dir, Settings};
use dna_analysis_gui::runner::{with_default_extension, EngineLocator};
use dna_analysis_gui::session::AnalysisSession;

const LABEL_COLOR: Color32 = Color32::YELLOW;
const FORM_FILL: Color32 = Color32::BLACK;

pub struct AnalysisApp {
    settings: Settings,
    engine: EngineLocator,
    session: AnalysisSession,

    background: Option<BackgroundImage>,
    background_texture: Option<egui::TextureHandle>,
    resize: ResizeDebounce,
}

impl AnalysisApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let base_dir = app_dir();
        let engine = EngineLocator::new(&base_dir, settings.engine_path.clone());
        let background = load_background(&settings, &base_dir);
        let resize = ResizeDebounce::new(settings.resize_debounce());

        Self {
            settings,
            engine,
            session: AnalysisSession::new(),
            background,
            background_texture: None,
            resize,
        }
    }

    fn select_input_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("FASTA files", &["fasta", "fa"])
            .pick_file()
        {
            self.session.input_path = path.display().to_string();
        }
    }

    fn select_output_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .save_file()
        {
            self.session.output_path = with_default_extension(path, "csv").display().to_string();
        }
    }

    fn run_analysis(&mut self) {
        if let Err(e) = self.session.submit(&self.engine) {
            log::warn!("Cannot start analysis: {e}");
            show_error(&e.to_string());
        }
    }

    /// Rescale the background once the window has stopped changing size.
    fn update_background(&mut self, ctx: &egui::Context) {
        let Some(image) = &self.background else {
            return;
        };

        let now = Instant::now();
        let size = ctx.screen_rect().size() * ctx.pixels_per_point();
        self.resize
            .observe([size.x.round() as u32, size.y.round() as u32], now);

        if let Some(size) = self.resize.due(now) {
            let rendered = image.render(size);
            match &mut self.background_texture {
                Some(texture) => texture.set(rendered, egui::TextureOptions::LINEAR),
                None => {
                    self.background_texture =
                        Some(ctx.load_texture("background", rendered, egui::TextureOptions::LINEAR))
                }
            }
        }

        if let Some(wait) = self.resize.remaining(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn paint_background(&self, ui: &egui::Ui) {
        let texture = self.background_texture.as_ref().map(|t| t.id());
        ui.painter().add(background_shape(texture, ui.max_rect()));
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        let form_width = ctx.screen_rect().width() * 0.9;

        egui::Area::new(egui::Id::new("analysis_form"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::default()
                    .fill(FORM_FILL)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_width(form_width - 32.0);
                        let field_width = (ui.available_width() - 220.0).max(160.0);

                        egui::Grid::new("file_grid")
                            .num_columns(3)
                            .spacing([10.0, 15.0])
                            .show(ui, |ui| {
                                ui.label(form_label("Input FASTA File:"));
                                ui.add(
                                    egui::TextEdit::singleline(&mut self.session.input_path)
                                        .desired_width(field_width),
                                );
                                if ui.button("Browse").clicked() {
                                    self.select_input_file();
                                }
                                ui.end_row();

                                ui.label(form_label("Output CSV File:"));
                                ui.add(
                                    egui::TextEdit::singleline(&mut self.session.output_path)
                                        .desired_width(field_width),
                                );
                                if ui.button("Browse").clicked() {
                                    self.select_output_file();
                                }
                                ui.end_row();
                            });

                        ui.add_space(20.0);
                        ui.vertical_centered(|ui| {
                            let running = self.session.is_running();
                            if ui
                                .add_enabled(!running, egui::Button::new("▶ Run Analysis"))
                                .clicked()
                            {
                                self.run_analysis();
                            }

                            ui.add_space(5.0);
                            ui.horizontal(|ui| {
                                if running {
                                    ui.spinner();
                                }
                                ui.label(form_label(&self.session.status_text()));
                            });
                        });
                    });
            });
    }
}

impl eframe::App for AnalysisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_running() {
            self.session.poll();
            ctx.request_repaint_after(self.settings.poll_interval());
        }

        self.update_background(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| self.paint_background(ui));

        self.show_form(ctx);
    }
}

/// Scaled picture if one has been rendered, otherwise the fallback colour.
fn background_shape(texture: Option<egui::TextureId>, rect: egui::Rect) -> egui::Shape {
    match texture {
        Some(id) => {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            egui::Shape::image(id, rect, uv, Color32::WHITE)
        }
        None => egui::Shape::rect_filled(rect, 0.0, FALLBACK_COLOR),
    }
}

fn form_label(text: &str) -> RichText {
    RichText::new(text).color(LABEL_COLOR).strong()
}

fn show_error(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Configured background, or one picked by the user if it is missing.
/// `None` means the solid fallback colour.
fn load_background(settings: &Settings, base_dir: &std::path::Path) -> Option<BackgroundImage> {
    let path = settings.background_path(base_dir);
    if path.exists() {
        return open_background(&path);
    }

    log::info!("Background image not found at {}", path.display());
    if !settings.prompt_for_background {
        log::info!("Using fallback solid background");
        return None;
    }

    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("Image Not Found")
        .set_description("Background image not found. Please select an image file.")
        .set_buttons(rfd::MessageButtons::Ok)
        .show();

    let picked: Option<PathBuf> = rfd::FileDialog::new()
        .set_title("Select Background Image")
        .add_filter("Image files", &["jpg", "jpeg", "png"])
        .pick_file();

    match picked {
        Some(path) => open_background(&path),
        None => {
            log::info!("No image selected; using fallback solid background");
            None
        }
    }
}

fn open_background(path: &std::path::Path) -> Option<BackgroundImage> {
    match BackgroundImage::open(path) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("Error loading background {}: {e}; using fallback", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(620.0, 500.0))
    }

    #[test]
    fn test_background_without_texture_is_solid() {
        match background_shape(None, window_rect()) {
            egui::Shape::Rect(shape) => {
                assert_eq!(shape.rect, window_rect());
                assert_eq!(shape.fill, FALLBACK_COLOR);
            }
            other => panic!("expected a filled rect, got {other:?}"),
        }
    }

    #[test]
    fn test_background_with_texture_covers_window() {
        let id = egui::TextureId::Managed(1);
        let shape = background_shape(Some(id), window_rect());
        assert_eq!(shape.texture_id(), id);
        assert_eq!(shape.visual_bounding_rect(), window_rect());
    }
}
