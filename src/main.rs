fn main() {
    seo_brief::app::cli::run();
}
