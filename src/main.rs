use std::env;
use std::path::Path;
use std::process;
use std::rc::Rc;
use tracing::{error, info};
use daterangepicker::{Calendar, DateRangePickerView, Error, LoggingConfig, MenuItem, PickerConfig};

/// Usage: `daterangepicker [CONFIG.yaml] [PRESET_INDEX]`
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (config_path, preset_index) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            LoggingConfig::default().init();
            error!("{e}");
            process::exit(2);
        }
    };

    let config = match config_path.map(PickerConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            LoggingConfig::default().init();
            error!("{e}");
            process::exit(1);
        }
    };
    config.logging.init();

    if let Err(e) = run(&config, preset_index) {
        error!("{e}");
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<(Option<&Path>, Option<usize>), Error> {
    let mut config_path = None;
    let mut preset_index = None;
    for arg in args {
        match arg.parse::<usize>() {
            Ok(index) if preset_index.is_none() => preset_index = Some(index),
            Ok(_) => return Err(Error::InvalidArgument(arg.clone())),
            Err(_) if config_path.is_none() => config_path = Some(Path::new(arg.as_str())),
            Err(_) => return Err(Error::InvalidArgument(arg.clone())),
        }
    }
    Ok((config_path, preset_index))
}

fn run(config: &PickerConfig, preset_index: Option<usize>) -> Result<(), Error> {
    let calendar = Rc::new(config.calendar());
    let presets = config.catalog(calendar.today())?;
    let mut view = DateRangePickerView::new(presets, calendar.clone());
    view.set_date_style(config.date_style);

    view.open_popover();
    if let Some(index) = preset_index {
        let date_range = view.select_preset(index)?;
        info!(range = %date_range, "applied preset");
    }

    let selected = view.selected_preset();
    for (index, (item, preset)) in view.menu_items().iter()
        .zip(view.controller().presets().presets())
        .enumerate()
    {
        match item {
            MenuItem::Separator => println!("    ----------------"),
            MenuItem::Item(title) => {
                let marker = if index == selected { '*' } else { ' ' };
                let dates = preset.resolve(&*calendar)
                    .map(|range| format!("{} - {}", config.date_style.format(range.start_date), config.date_style.format(range.end_date)))
                    .unwrap_or_default();
                println!("{marker} {index:>2} {title:<16} {dates}");
            }
        }
    }
    view.close_popover();

    let [backward, label, forward] = view.segment_labels();
    println!("[{backward}] {label} [{forward}]");
    Ok(())
}
