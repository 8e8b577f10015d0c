use std::fs::File;
use std::io::BufWriter;
use std::time::SystemTime;

use memory_stats::memory_stats;
use tracing_flame::FlameLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use ifc::reflection::Module;
use ifc::Blob;

fn setup_global_subscriber() -> impl Drop {
	let file = File::create("./trace.folded").unwrap();
	let flame_layer = FlameLayer::new(BufWriter::new(file)).with_file_and_line(false);
	let guard = flame_layer.flush_on_drop();

	let subscriber = Registry::default()
		.with(flame_layer);

	tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");
	guard
}

fn main() {
	let _guard = setup_global_subscriber();

	let path = std::env::args()
		.nth(1)
		.expect("usage: experiments <artifact.ifc>");

	let start = SystemTime::now();
	let blob = Blob::map(&path).unwrap();
	let artifact = ifc::File::open(&blob).unwrap();

	println! {
		"Open time: {:?}, RAM: {}MB",
		start.elapsed().unwrap(),
		memory_stats().unwrap().virtual_mem as f32 / 1000000.0,
	}

	println!("{:?} {:?}", artifact.version(), artifact.header().unit);
	for summary in artifact.table_of_contents() {
		let name = artifact.get_string(summary.name).unwrap_or("<bad name>");
		println!(
			"{name:40} {:>8} entries x {:>4} bytes",
			summary.cardinality.count(),
			summary.entry_size.count(),
		);
	}

	let start = SystemTime::now();
	let module = Module::new(&artifact);
	let scopes = module.scope_declarations().unwrap().count();
	let namespaces = module
		.scope_declarations()
		.unwrap()
		.filter(|scope| scope.is_namespace().unwrap_or(false))
		.count();

	println! {
		"Walk time: {:?}, RAM: {}MB",
		start.elapsed().unwrap(),
		memory_stats().unwrap().virtual_mem as f32 / 1000000.0,
	}
	println!("Scope declarations: {scopes} ({namespaces} namespaces)");
}
