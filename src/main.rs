use draw_and_share::app;
use draw_and_share::config::AppConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default(&AppConfig::default_path());
    macroquad::Window::from_config(config.window_conf(), app::run(config));
}
