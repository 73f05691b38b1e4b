use std::io::Write;

pub(crate) fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    let Some(level) = verbose.log_level() else {
        return;
    };

    let mut builder = env_logger::Builder::new();
    builder.filter(None, level.to_level_filter());

    if level == log::Level::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            let style = level_style(record.level());
            let level = format!("[{}]", record.level()).to_lowercase();
            writeln!(
                f,
                "{}{:8}{} {}",
                style.render(),
                level,
                style.render_reset(),
                record.args()
            )
        });
    }

    builder.target(env_logger::Target::Pipe(Box::new(anstream::stderr())));
    builder.init();
}

fn level_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default().bold(),
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug | log::Level::Trace => anstyle::Style::new().dimmed(),
    }
}
