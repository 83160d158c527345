use queryedit::update;
use tracing_subscriber::EnvFilter;

// url_parameters 'http://localhost:8080/query?q=hello&page=2' page 3
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);

    let (Some(url), Some(name)) = (args.next(), args.next()) else {
        println!("usage: url_parameters <url> <name> [value]");
        return;
    };

    let value = args.next();

    println!("{}", update(&url, &name, value.as_deref()));
}
