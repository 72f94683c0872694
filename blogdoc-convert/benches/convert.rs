#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  reason = "Fine in benchmarks"
)]
use std::hint::black_box;

use blogdoc_convert::{ConverterOptions, DocumentConverter};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const POST_SMALL: &str = r#"<h1>Welcome</h1>
<p>This is a test paragraph. You can read this. Yes.</p>"#;

const POST_SECTION: &str = r#"<h2>Getting started</h2>
<p>Install the toolchain, then <strong>create</strong> a new project with
<code>cargo new</code>. The <a href="/docs">documentation</a> covers the rest.</p>
<ul class="list-disc list-outside leading-3 -mt-2 tight">
  <li><p>Fast builds</p></li>
  <li><p>Reliable dependencies</p></li>
  <li><p>Friendly compiler</p></li>
</ul>
<ul class="not-prose pl-2" data-type="taskList">
  <li data-checked="true" data-type="taskItem"><label><input type="checkbox" checked="checked"><span></span></label><div><p>Read the book</p></div></li>
  <li data-checked="false" data-type="taskItem"><label><input type="checkbox"><span></span></label><div><p>Ship it</p></div></li>
</ul>
<blockquote class="border-l-4 border-primary"><p>Premature optimization is the root of all evil.</p></blockquote>
<pre><code class="language-rust">fn main() {
    println!("Hello, world!");
}</code></pre>
<img class="rounded-lg border border-muted" src="https://cdn.example.com/hero.png" alt="Hero">
<iframe src="https://www.youtube.com/embed/abc" width="560" height="315"></iframe>
<table><tr><td>dropped</td></tr></table>
"#;

fn bench_parse(c: &mut Criterion) {
  let converter = DocumentConverter::default();
  let post_large = POST_SECTION.repeat(50);

  let mut group = c.benchmark_group("parse");
  for (name, html) in [
    ("small", POST_SMALL),
    ("section", POST_SECTION),
    ("large", post_large.as_str()),
  ] {
    group.bench_with_input(BenchmarkId::from_parameter(name), html, |b, html| {
      b.iter(|| converter.parse(black_box(html)));
    });
  }
  group.finish();
}

fn bench_serialize(c: &mut Criterion) {
  let converter = DocumentConverter::new(ConverterOptions::default());
  let doc = converter.parse(&POST_SECTION.repeat(50));

  c.bench_function("serialize/large", |b| {
    b.iter(|| converter.serialize(black_box(&doc)));
  });
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
