// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                 _   _
 _ __ ___   __ _| |_| |__
| '_ ` _ \ / _` | __| '_ \
| | | | | | (_| | |_| | | |
|_| |_| |_|\__,_|\__|_| |_|

    Arithmetic over HTTP
"#;
    println!("{}", banner);
}
