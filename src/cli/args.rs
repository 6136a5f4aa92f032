//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Scan(ScanArgs),
    List(ListArgs),
    Check(CheckArgs),
}

#[derive(Debug, Clone)]
pub struct ScanArgs {
    pub path: String,
    pub cache: Option<String>,
    pub ttl_secs: Option<u64>,
    pub force: bool,
    pub serial: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct ListArgs {
    pub cache: String,
    pub category: Option<String>,
    pub type_name: Option<String>,
    pub top: Option<usize>,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub path: String,
    pub report: Option<String>,
    pub max_file_size_mib: Option<u64>,
    pub json: bool,
    pub serial: bool,
    pub quiet: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            cache: None,
            ttl_secs: None,
            force: false,
            serial: false,
            quiet: false,
        }
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            report: None,
            max_file_size_mib: None,
            json: false,
            serial: false,
            quiet: false,
        }
    }
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "scan" => {
            let scan_args = parse_scan_args(&args[2..])?;
            Command::Scan(scan_args)
        }
        "list" => {
            let list_args = parse_list_args(&args[2..])?;
            Command::List(list_args)
        }
        "check" => {
            let check_args = parse_check_args(&args[2..])?;
            Command::Check(check_args)
        }
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn parse_scan_args(args: &[String]) -> Result<ScanArgs, String> {
    let mut scan_args = ScanArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--cache" => {
                i += 1;
                if i >= args.len() {
                    return Err("--cache requires a file path".to_string());
                }
                scan_args.cache = Some(args[i].clone());
            }
            "--ttl" => {
                i += 1;
                if i >= args.len() {
                    return Err("--ttl requires a value".to_string());
                }
                scan_args.ttl_secs = Some(
                    args[i]
                        .parse()
                        .map_err(|_| "--ttl must be a number of seconds".to_string())?,
                );
            }
            "--force" => {
                scan_args.force = true;
            }
            "--serial" => {
                scan_args.serial = true;
            }
            "--quiet" => {
                scan_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if scan_args.path.is_empty() {
                    scan_args.path = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if scan_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    Ok(scan_args)
}

fn parse_list_args(args: &[String]) -> Result<ListArgs, String> {
    let mut cache = String::new();
    let mut category = None;
    let mut type_name = None;
    let mut top = None;
    let mut json = false;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--category" => {
                i += 1;
                if i >= args.len() {
                    return Err("--category requires a value".to_string());
                }
                category = Some(args[i].clone());
            }
            "--type" => {
                i += 1;
                if i >= args.len() {
                    return Err("--type requires a value".to_string());
                }
                type_name = Some(args[i].clone());
            }
            "--top" => {
                i += 1;
                if i >= args.len() {
                    return Err("--top requires a value".to_string());
                }
                top = Some(
                    args[i]
                        .parse()
                        .map_err(|_| "--top must be a number".to_string())?,
                );
            }
            "--json" => {
                json = true;
            }
            arg if !arg.starts_with("--") => {
                if cache.is_empty() {
                    cache = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if cache.is_empty() {
        return Err("Missing required argument: CACHE_FILE".to_string());
    }
    if category.is_some() && type_name.is_some() {
        return Err("Use either --category or --type, not both".to_string());
    }

    Ok(ListArgs {
        cache,
        category,
        type_name,
        top,
        json,
    })
}

fn parse_check_args(args: &[String]) -> Result<CheckArgs, String> {
    let mut check_args = CheckArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--report" => {
                i += 1;
                if i >= args.len() {
                    return Err("--report requires a file path".to_string());
                }
                check_args.report = Some(args[i].clone());
            }
            "--max-file-size" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-file-size requires a value".to_string());
                }
                let mib: u64 = args[i]
                    .parse()
                    .map_err(|_| "--max-file-size must be a number of MiB".to_string())?;
                if mib == 0 {
                    return Err("--max-file-size must be greater than zero".to_string());
                }
                check_args.max_file_size_mib = Some(mib);
            }
            "--json" => {
                check_args.json = true;
            }
            "--serial" => {
                check_args.serial = true;
            }
            "--quiet" => {
                check_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if check_args.path.is_empty() {
                    check_args.path = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if check_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    Ok(check_args)
}
