// Command dispatch is a macro so the CLI stays generic over the configured
// country source without boxing it.
#[macro_export]
macro_rules! process_cli {
    ($cli:ident, $config:ident, $source:ident) => {
        match $cli.command {
            Command::Config { command } => match command {
                ConfigCommand::Source { source_type } => {
                    let mut config = Config::load(None)?;
                    let typ = match source_type.as_str() {
                        "rest" => SourceType::Rest,
                        "file" => SourceType::File,
                        _ => {
                            return Err(anyhow!(
                                "Invalid source type: valid types are `rest` and `file`"
                            ))
                        }
                    };

                    config.set_source_type(typ);
                    config.save(None)?;
                }
                ConfigCommand::SetEndpoint { url } => {
                    let mut config = Config::load(None)?;
                    config.set_endpoint(url);
                    config.save(None)?;
                }
                ConfigCommand::SetCountriesFile { filename } => {
                    let mut config = Config::load(None)?;
                    config.set_countries_file(Some(filename));
                    config.save(None)?;
                }
                ConfigCommand::SetWindow { set } => {
                    let mut config = Config::load(None)?;
                    config.set_window(Some(FancyDuration::parse(&set)?));
                    config.save(None)?;
                }
                ConfigCommand::SetRefreshInterval { set } => {
                    let mut config = Config::load(None)?;
                    config.set_refresh_interval(Some(FancyDuration::parse(&set)?));
                    config.save(None)?;
                }
            },
            Command::List {} => {
                let groups = $crate::fetch_groups!($config, $source);
                print_group(PAST_TITLE, groups.past_hour());
                print_group(NEXT_TITLE, groups.next_hour());
            }
            Command::Past {} => {
                let groups = $crate::fetch_groups!($config, $source);
                print_group(PAST_TITLE, groups.past_hour());
            }
            Command::Next {} => {
                let groups = $crate::fetch_groups!($config, $source);
                print_group(NEXT_TITLE, groups.next_hour());
            }
            Command::Notify { timeout } => {
                let timeout = timeout.map_or(std::time::Duration::new(10, 0), |t| {
                    fancy_duration::FancyDuration::<std::time::Duration>::parse(&t)
                        .expect("Invalid Duration")
                        .duration()
                });

                let groups = $crate::fetch_groups!($config, $source);

                let mut notification = notify_rust::Notification::new();
                notification.summary("minuit");
                notification.timeout(timeout);

                for entry in groups.past_hour() {
                    notification
                        .body(&format!("{}: {}", PAST_TITLE, entry.line()))
                        .show()?;
                }

                for entry in groups.next_hour() {
                    notification
                        .body(&format!("{}: {}", NEXT_TITLE, entry.line()))
                        .show()?;
                }
            }
        }
    };
}

#[macro_export]
macro_rules! fetch_groups {
    ($config:ident, $source:ident) => {{
        let countries = $source
            .countries()
            .await
            .context($crate::source::LOAD_ERROR)?;

        $crate::window::categorize_window(
            Some(&countries),
            $crate::time::now(),
            $config.window_minutes(),
        )
    }};
}
