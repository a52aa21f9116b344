// Example: variable row heights measured after layout, plus a failed page and a manual retry.
use pagelist::{ListOptions, Mode};
use pagelist_adapter::{Controller, MemoryHost, MemoryRow, PageSource, VecSource};

fn main() {
    // Rows wrap: one line per 20 characters, 18px per line.
    let host = MemoryHost::with_row_height(300.0, |_, content| {
        let lines = content.len().div_ceil(20).max(1);
        lines as f32 * 18.0
    });
    let options = ListOptions::new(|row: &mut MemoryRow, item: &String, _: usize, _: &[String]| {
        row.content.clone_from(item);
    })
    .with_mode(Mode::Windowed)
    .with_page_size(12);

    let mut c = Controller::new(host, options).expect("valid options");
    let mut source = VecSource::new(
        (0..60)
            .map(|i| "lorem ipsum ".repeat(i % 5 + 1))
            .collect::<Vec<_>>(),
    );
    source.fail_next(1);

    c.start();
    c.serve(&mut source);
    println!("after first fetch: status={:?}", c.list().status());

    if c.retry() {
        if let Some(request) = c.next_request() {
            let (data, status) = source.fetch(request);
            c.deliver(request, data, status);
        }
    }
    c.frame(0);
    println!(
        "measured={} extent={} content_height={:?}",
        c.list().positions().len(),
        c.list().positions().extent(),
        c.host().content_height()
    );

    c.scroll_to(150.0, 200);
    c.serve(&mut source);
    c.frame(300);
    println!("state={:?}", c.list().state());
}
