use anyhow::Result;
use graphwin::types::Graph;
use tracing::info;
use tracing_subscriber::EnvFilter;

const X_MIN: f64 = 2.3;
const X_MAX: f64 = 8.3;
const TICK_DX: f64 = 0.6;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let graph = Graph::new(f, "y = (x+2)^2/√(x^2+1)".to_string(), X_MIN, X_MAX, TICK_DX);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Graph: y = (x+2)^2/√(x^2+1)")
            .with_inner_size([900.0, 550.0]),
        ..Default::default()
    };
    info!("opening graph window");
    eframe::run_native(
        "graphwin",
        options,
        Box::new(move |_| Ok(Box::new(App { graph }))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the graph window: {e}"))?;
    info!("window closed");
    Ok(())
}

struct App {
    graph: Graph,
}
impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        if ctx.style().visuals.dark_mode {
            self.graph.set_dark_mode();
        } else {
            self.graph.set_light_mode();
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| self.graph.update(ctx, ui));
    }
}
fn f(x: f64) -> f64 {
    (x + 2.0) * (x + 2.0) / (x * x + 1.0).sqrt()
}
