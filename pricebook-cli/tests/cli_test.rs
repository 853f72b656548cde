use clap::Parser;
use pricebook_cli::{run, Cli, Command};
use pricebook_store::Config;

const CONFIG: &str = r#"
    [cache]
    key_scheme = "structural"

    [catalog.products]
    a = 1.0
    b = 10.0

    [accounts.a]
    balance = 1
    [accounts.b]
    balance = 10
    [accounts.d]
    balance = 12
    [accounts.d10]
    balance = 11
    [accounts.xxx_1]
    owner = "Xavier"
    balance = 22
"#;

fn execute(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let config = Config::from_toml_str(CONFIG)?;
    let mut out = Vec::new();
    run(&cli.command, &config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_price_reports_total_and_cache_hits() {
    let output = execute(&["pricebook", "price", "b", "a", "--repeat", "3"]).unwrap();

    assert_eq!(
        output,
        "total: 11\ncache: {\"hits\":2,\"misses\":1,\"failures\":0}\n"
    );
}

#[test]
fn test_price_empty_order() {
    let output = execute(&["pricebook", "price"]).unwrap();

    assert!(output.starts_with("total: 0\n"));
}

#[test]
fn test_price_unknown_item_fails() {
    let err = execute(&["pricebook", "price", "a", "xxx", "b"]).unwrap_err();

    assert!(format!("{:#}", err).contains("Item not found in catalog: xxx"));
}

#[test]
fn test_products_listed_by_name() {
    let output = execute(&["pricebook", "products"]).unwrap();

    assert_eq!(output, "a\t1\nb\t10\n");
}

#[test]
fn test_accounts_by_balance() {
    let output = execute(&["pricebook", "accounts", "--sort", "balance-desc"]).unwrap();

    let logins: Vec<&str> = output.lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(logins, vec!["xxx_1", "d", "d10", "b", "a"]);
    assert!(output.starts_with("xxx_1\tXavier\t22\n"));
}

#[test]
fn test_config_dir_flag() {
    let cli = Cli::try_parse_from(["pricebook", "--config-dir", "/etc/pricebook", "products"]).unwrap();

    assert_eq!(cli.config_dir, std::path::PathBuf::from("/etc/pricebook"));
    assert!(matches!(cli.command, Command::Products));
}

#[test]
fn test_unknown_sort_mode_rejected() {
    assert!(Cli::try_parse_from(["pricebook", "accounts", "--sort", "money"]).is_err());
}
