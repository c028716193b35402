/// Display the accepted trace document format
pub fn display_schema(show_details: bool) {
    println!("Profiler Trace Document Format");
    println!();

    if show_details {
        println!("Document Structure:");
        println!("  version: string|number   - Profiler format version");
        println!("  eventCount: number       - Events recorded by the profiler");
        println!("  eventsWritten: number    - Events written to this file");
        println!("  cpuCount: number         - CPUs on the capturing machine");
        println!("  categories: array?       - Category names (indexed exports)");
        println!("  eventNames: array?       - Event names (indexed exports)");
        println!("  events: array            - Event objects, any keys");
        println!("    duration: number?      - Sorts rows and sizes pie slices");
        println!("    catIdx: number?        - Category index, preferred for coloring");
        println!("    category: string?      - Category name (non-indexed exports)");
        println!("    colorId: number?       - Profiler color slot (not used for drawing)");
    } else {
        println!("Use --show for detailed format information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Profiler View v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Renders profiler trace documents as an event table and a duration pie chart.");
}
