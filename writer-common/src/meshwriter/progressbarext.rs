use indicatif::ProgressBar;

pub trait ProgressBarExt {
    fn new_sample_progress_bar(sample_num: u64) -> ProgressBar;
}

impl ProgressBarExt for ProgressBar {
    fn new_sample_progress_bar(sample_num: u64) -> ProgressBar {
        let progress_bar = ProgressBar::new(sample_num);
        match indicatif::ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        {
            Ok(style) => progress_bar.set_style(style),
            Err(e) => tracing::debug!("falling back to default progress style: {}", e),
        }
        progress_bar
    }
}
