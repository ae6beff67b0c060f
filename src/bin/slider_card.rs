//! Minimal teaching example: one card with a slider bound to a text output.

use eframe::egui;

struct SliderCardApp {
    n: u32,
}

impl Default for SliderCardApp {
    fn default() -> Self {
        Self { n: 20 }
    }
}

impl eframe::App for SliderCardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.strong("Slider card");
                ui.separator();
                ui.add(egui::Slider::new(&mut self.n, 0..=100).text("N"));
                ui.monospace(format!("n*2 is {}", self.n * 2));
            });
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([320.0, 180.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Slider card",
        options,
        Box::new(|_cc| Ok(Box::new(SliderCardApp::default()))),
    )
}
