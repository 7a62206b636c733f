use texdemo::{
    config::DemoConfig,
    logging,
    scenes::{self, quad::QuadScene},
};

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("failed to initialise logging: {e}");
    }
    if let Err(e) = scenes::run(&DemoConfig::quad(), QuadScene::new) {
        log::error!("{e}");
    }
}
