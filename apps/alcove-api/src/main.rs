use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = alcove_api::Args::parse();
	alcove_api::run(args).await
}
