use texdemo::{
    config::DemoConfig,
    logging,
    scenes::{self, cube::CubeScene},
};

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("failed to initialise logging: {e}");
    }
    if let Err(e) = scenes::run(&DemoConfig::cube(), CubeScene::new) {
        log::error!("{e}");
    }
}
