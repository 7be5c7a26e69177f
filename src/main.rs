use eframe::egui;
use sentence_quiz::QuizApp;
use sentence_quiz::config::QuizConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    log::info!("Endpoint de preguntas: {}", config.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Construcción de frases",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}
