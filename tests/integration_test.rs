//! Integration tests for chunkwise.

#![allow(clippy::expect_used)]

use chunkwise::chunking::{
    Chunker, FixedSizeChunker, Parameters, RecursiveChunker, SentenceBasedChunker,
    SlidingWindowChunker, StrategyConfig, StrategyKind, available_strategies, create_chunker,
    describe_all,
};
use chunkwise::core::Chunk;

/// Slices `text` by character offsets.
fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

fn texts(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(Chunk::text).collect()
}

#[test]
fn test_fixed_size_worked_example() {
    let chunker = FixedSizeChunker::with_size_and_overlap(10, 2).expect("valid config");
    let chunks = chunker.chunk_text("Hello world! How are you?");

    assert_eq!(texts(&chunks), ["Hello worl", "rld! How a", " are you?"]);
    let starts: Vec<_> = chunks.iter().map(Chunk::start_char).collect();
    assert_eq!(starts, [0, 8, 16]);
    assert_eq!(chunks[0].overlap_prev(), 0);
    assert_eq!(chunks[0].overlap_next(), 2);
    assert_eq!(chunks[1].overlap_prev(), 2);
    assert_eq!(chunks[2].overlap_next(), 0);
}

#[test]
fn test_sliding_window_worked_example() {
    let chunker = SlidingWindowChunker::with_window(1000, 600).expect("valid config");
    let text = "lorem ipsum ".repeat(250);
    let chunks = chunker.chunk_text(&text);

    assert_eq!(chunks[0].char_range(), 0..1000);
    assert_eq!(chunks[1].char_range(), 600..1600);
    assert_eq!(chunks[0].overlap_next(), 400);
    assert_eq!(chunks[1].overlap_prev(), 400);
    assert_eq!(chunks.last().expect("chunks").end_char(), 3000);
}

#[test]
fn test_sentence_based_worked_example() {
    let chunker = SentenceBasedChunker::with_sentences(2, 1).expect("valid config");
    let chunks = chunker.chunk_text("Hello world! How are you? I am good. Thanks!");
    assert_eq!(
        texts(&chunks),
        ["Hello world! How are you?", "I am good. Thanks!"]
    );
}

#[test]
fn test_recursive_worked_example() {
    let text = "# Section 1\nFirst paragraph here.\n\n# Section 2\nSecond paragraph.";
    let chunker = RecursiveChunker::with_bounds(40, 10).expect("valid config");
    let chunks = chunker.chunk_text(text);

    assert_eq!(
        texts(&chunks),
        [
            "# Section 1\nFirst paragraph here.",
            "# Section 2\nSecond paragraph."
        ]
    );
    for chunk in &chunks {
        assert_eq!(
            char_slice(text, chunk.start_char(), chunk.end_char()),
            chunk.text()
        );
    }
}

#[test]
fn test_recursive_whole_document_fits() {
    let text = "# Section 1\nFirst paragraph here.\n\n# Section 2\nSecond paragraph.";
    let chunker = create_chunker("recursive", &Parameters::new()).expect("registered");
    let chunks = chunker.chunk_text(text);
    // Default minimum is 100 characters and the document is shorter.
    assert!(chunks.is_empty());

    let params = Parameters::from([("min_chunk_size".to_string(), 50)]);
    let chunker = create_chunker("recursive", &params).expect("registered");
    let chunks = chunker.chunk_text(text);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text(), text);
}

#[test]
fn test_every_strategy_handles_empty_input() {
    for kind in available_strategies() {
        let chunker = StrategyConfig::default_for(*kind)
            .build()
            .expect("default config builds");
        assert!(chunker.chunk_text("").is_empty(), "{kind} produced chunks");
    }
}

#[test]
fn test_registry_round_trip() {
    let names: Vec<_> = describe_all().into_iter().map(|m| m.name).collect();
    let expected: Vec<_> = StrategyKind::ALL.iter().map(|k| k.name().to_string()).collect();
    assert_eq!(names, expected);

    for name in ["fixed", "Sliding Window", "sentence-based", "RECURSIVE"] {
        assert!(create_chunker(name, &Parameters::new()).is_ok(), "{name}");
    }
    assert!(create_chunker("semantic", &Parameters::new()).is_err());
}

#[test]
fn test_chunk_json_export() {
    let chunker = FixedSizeChunker::with_size_and_overlap(10, 2).expect("valid config");
    let chunks = chunker.chunk_text("Hello world! How are you?");
    let json = serde_json::to_value(&chunks).expect("serializable");

    let first = &json[0];
    for field in [
        "id",
        "text",
        "start_char",
        "end_char",
        "length",
        "overlap_prev",
        "overlap_next",
    ] {
        assert!(first.get(field).is_some(), "missing {field}");
    }

    let back: Vec<Chunk> = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, chunks);
}

#[test]
fn test_chunk_import_legacy_field_names() {
    let json = r#"{
        "id": "abc",
        "text": "hello",
        "start_position": 3,
        "end_position": 8,
        "length": 5,
        "overlap_previous": 1
    }"#;
    let chunk: Chunk = serde_json::from_str(json).expect("aliases accepted");
    assert_eq!(chunk.char_range(), 3..8);
    assert_eq!(chunk.overlap_prev(), 1);
    assert_eq!(chunk.overlap_next(), 0);
}

/// Property-based tests.
mod property_tests {
    use super::char_slice;
    use chunkwise::chunking::{
        Chunker, FixedSizeChunker, RecursiveChunker, SentenceBasedChunker, SentenceSplitter,
        SlidingWindowChunker, UnicodeSentenceSplitter,
    };
    use chunkwise::core::Chunk;
    use proptest::prelude::*;

    fn spans(chunks: &[Chunk]) -> Vec<(String, usize, usize, usize, usize)> {
        chunks
            .iter()
            .map(|c| {
                (
                    c.text().to_string(),
                    c.start_char(),
                    c.end_char(),
                    c.overlap_prev(),
                    c.overlap_next(),
                )
            })
            .collect()
    }

    proptest! {
        #[test]
        fn fixed_size_covers_document(
            text in "[a-zé漢 .\n]{0,300}",
            size in 1usize..60,
            overlap_seed in 0usize..60,
        ) {
            let overlap = overlap_seed % size;
            let chunker = FixedSizeChunker::with_size_and_overlap(size, overlap).expect("valid");
            let chunks = chunker.chunk_text(&text);
            let total = text.chars().count();

            if total == 0 {
                prop_assert!(chunks.is_empty());
            } else {
                prop_assert_eq!(chunks[0].start_char(), 0);
                prop_assert_eq!(chunks.last().expect("chunks").end_char(), total);
            }
            for chunk in &chunks {
                prop_assert!(chunk.length() <= size);
                prop_assert!(chunk.length() > 0);
                prop_assert_eq!(chunk.length(), chunk.end_char() - chunk.start_char());
                prop_assert_eq!(char_slice(&text, chunk.start_char(), chunk.end_char()), chunk.text());
            }
            for pair in chunks.windows(2) {
                prop_assert_eq!(pair[1].start_char(), pair[0].end_char() - overlap);
            }
        }

        #[test]
        fn sliding_window_covers_document(
            text in "[a-z0-9 ]{0,300}",
            window in 1usize..60,
            stride_seed in 0usize..60,
        ) {
            let stride = stride_seed % window + 1;
            let chunker = SlidingWindowChunker::with_window(window, stride).expect("valid");
            let chunks = chunker.chunk_text(&text);
            let total = text.chars().count();

            prop_assert_eq!(chunks.len(), total.div_ceil(stride));
            for (i, chunk) in chunks.iter().enumerate() {
                prop_assert_eq!(chunk.start_char(), i * stride);
                prop_assert!(chunk.start_char() < total);
                prop_assert_eq!(chunk.end_char(), (i * stride + window).min(total));
                prop_assert_eq!(char_slice(&text, chunk.start_char(), chunk.end_char()), chunk.text());
            }
            if let Some(last) = chunks.last() {
                prop_assert_eq!(last.end_char(), total);
                prop_assert!(last.start_char() + stride >= total);
            }
        }

        #[test]
        fn sentence_based_keeps_every_sentence(
            words in proptest::collection::vec("[A-Z][a-z]{0,8}[.!?]", 0..30),
            max in 1usize..8,
            min_seed in 0usize..8,
        ) {
            let min = min_seed % max + 1;
            let text = words.join(" ");
            let chunker = SentenceBasedChunker::with_sentences(max, min).expect("valid");
            let chunks = chunker.chunk_text(&text);

            let joined = chunks.iter().map(Chunk::text).collect::<Vec<_>>().join(" ");
            let expected = UnicodeSentenceSplitter.split(&text).join(" ");
            prop_assert_eq!(joined, expected);

            let mut next_start = 0;
            for chunk in &chunks {
                prop_assert_eq!(chunk.start_char(), next_start);
                next_start = chunk.end_char() + 1;
            }
        }

        #[test]
        fn recursive_chunks_are_verbatim_and_bounded(
            text in "[a-z .,;\n#]{0,500}",
            max in 20usize..80,
            min in 1usize..10,
        ) {
            let chunker = RecursiveChunker::with_bounds(max, min).expect("valid");
            let chunks = chunker.chunk_text(&text);

            for chunk in &chunks {
                prop_assert!(chunk.length() <= max);
                prop_assert!(chunk.length() >= min);
                prop_assert_eq!(char_slice(&text, chunk.start_char(), chunk.end_char()), chunk.text());
            }
            for pair in chunks.windows(2) {
                prop_assert!(pair[0].end_char() <= pair[1].start_char());
            }
        }

        #[test]
        fn sentence_offsets_stay_inside_document(
            text in "[A-Za-z.!?\"' \n]{0,200}",
            max in 1usize..5,
        ) {
            let chunker = SentenceBasedChunker::with_sentences(max, 1).expect("valid");
            let total = text.chars().count();
            for chunk in chunker.chunk_text(&text) {
                prop_assert!(chunk.start_char() <= chunk.end_char());
                prop_assert!(chunk.end_char() <= total);
            }
        }

        #[test]
        fn recursive_keeps_all_content(
            text in "[a-z .,;!?\n#]{0,500}",
            max in 20usize..80,
        ) {
            let chunker = RecursiveChunker::with_bounds(max, 1).expect("valid");
            let chunks = chunker.chunk_text(&text);

            let kept: String = chunks
                .iter()
                .flat_map(|c| c.text().chars())
                .filter(|c| !c.is_whitespace())
                .collect();
            let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn chunking_is_deterministic(text in "[a-zA-Z .!?\n]{0,200}") {
            let strategies: Vec<Box<dyn Chunker>> = vec![
                Box::new(FixedSizeChunker::with_size_and_overlap(17, 3).expect("valid")),
                Box::new(SlidingWindowChunker::with_window(20, 7).expect("valid")),
                Box::new(SentenceBasedChunker::with_sentences(3, 2).expect("valid")),
                Box::new(RecursiveChunker::with_bounds(30, 2).expect("valid")),
            ];
            for chunker in &strategies {
                prop_assert_eq!(spans(&chunker.chunk_text(&text)), spans(&chunker.chunk_text(&text)));
            }
        }
    }
}

/// CLI command integration tests.
mod cli_tests {
    use chunkwise::cli::commands::execute;
    use chunkwise::cli::parser::{Cli, Commands, StrategyArgs};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_cli(format: &str, command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: format.to_string(),
            command,
        }
    }

    fn write_doc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write temp file");
        path
    }

    #[test]
    fn test_cmd_strategies_json() {
        let cli = make_cli("json", Commands::Strategies);
        let output = execute(&cli).expect("strategies");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value.as_array().expect("array").len(), 4);
        assert_eq!(value[1]["display_name"], "Sliding Window");
    }

    #[test]
    fn test_cmd_describe_text() {
        let cli = make_cli(
            "text",
            Commands::Describe {
                strategy: "sentence".to_string(),
                params: StrategyArgs {
                    max_sentences: Some(3),
                    ..StrategyArgs::default()
                },
            },
        );
        let output = execute(&cli).expect("describe");
        assert!(output.starts_with("Sentence Based (sentence_based)"));
        assert!(output.contains("max_sentences"));
    }

    #[test]
    fn test_cmd_describe_out_of_range() {
        let cli = make_cli(
            "text",
            Commands::Describe {
                strategy: "sentence_based".to_string(),
                params: StrategyArgs {
                    max_sentences: Some(51),
                    ..StrategyArgs::default()
                },
            },
        );
        let err = execute(&cli).expect_err("out of range");
        assert!(err.to_string().contains("max_sentences"));
    }

    #[test]
    fn test_cmd_chunk_csv() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_doc(&dir, "doc.txt", "Alpha, beta. Gamma \"delta\". Epsilon.");
        let cli = make_cli(
            "csv",
            Commands::Chunk {
                files: vec![path],
                strategy: "sentence_based".to_string(),
                params: StrategyArgs {
                    max_sentences: Some(1),
                    ..StrategyArgs::default()
                },
                stats: false,
            },
        );
        let output = execute(&cli).expect("chunk");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines[0],
            "id,text,start_char,end_char,length,overlap_prev,overlap_next"
        );
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains(",\"Alpha, beta.\",0,12,12,0,0"));
        assert!(lines[2].contains(",\"Gamma \"\"delta\"\".\","));
    }

    #[test]
    fn test_cmd_chunk_text_multiple_files() {
        let dir = TempDir::new().expect("temp dir");
        let a = write_doc(&dir, "a.txt", &"a".repeat(300));
        let b = write_doc(&dir, "b.txt", "");
        let cli = make_cli(
            "text",
            Commands::Chunk {
                files: vec![a, b],
                strategy: "fixed".to_string(),
                params: StrategyArgs {
                    chunk_size: Some(100),
                    ..StrategyArgs::default()
                },
                stats: false,
            },
        );
        let output = execute(&cli).expect("chunk");
        assert!(output.contains("a.txt: 3 chunks"));
        assert!(output.contains("b.txt: 0 chunks"));
    }

    #[test]
    fn test_cmd_chunk_stats_text() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_doc(&dir, "doc.txt", &"z".repeat(2500));
        let cli = make_cli(
            "text",
            Commands::Chunk {
                files: vec![path],
                strategy: "sliding_window".to_string(),
                params: StrategyArgs {
                    window_size: Some(1000),
                    stride: Some(600),
                    ..StrategyArgs::default()
                },
                stats: true,
            },
        );
        let output = execute(&cli).expect("chunk");
        // windows start at 0, 600, 1200, 1800 and 2400
        assert!(output.contains("Chunks:         5"));
        assert!(output.contains("Max length:     1000"));
        assert!(output.contains("Min length:     100"));
        assert!(output.contains("Total overlap:  1100"));
    }

    #[test]
    fn test_cmd_chunk_invalid_utf8() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("bad.txt");
        fs::write(&path, [b'o', b'k', 0xff, 0xfe]).expect("write");
        let cli = make_cli(
            "text",
            Commands::Chunk {
                files: vec![path],
                strategy: "fixed".to_string(),
                params: StrategyArgs::default(),
                stats: false,
            },
        );
        let err = execute(&cli).expect_err("invalid utf-8");
        assert!(err.to_string().contains("byte offset 2"));
    }
}

/// Tests that drive the compiled binary.
mod binary_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn chunkwise() -> Command {
        let mut cmd = Command::cargo_bin("chunkwise").expect("binary built");
        cmd.env_remove("CHUNKWISE_FORMAT")
            .env_remove("CHUNKWISE_STRATEGY")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_binary_strategies() {
        chunkwise()
            .arg("strategies")
            .assert()
            .success()
            .stdout(predicate::str::contains("fixed_size"))
            .stdout(predicate::str::contains("recursive"));
    }

    #[test]
    fn test_binary_chunk_stdin_json() {
        let output = chunkwise()
            .args(["--format", "json", "chunk", "--strategy", "sentence"])
            .write_stdin("Hello world! How are you? I am good. Thanks!")
            .output()
            .expect("run");
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(value[0]["source"], "-");
        assert_eq!(value[0]["chunks"][0]["text"], "Hello world! How are you? I am good. Thanks!");
    }

    #[test]
    fn test_binary_strategy_from_env() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("doc.txt");
        fs::write(&path, "x".repeat(250)).expect("write");

        chunkwise()
            .env("CHUNKWISE_STRATEGY", "sliding")
            .args(["chunk", "--stats", "--window-size", "100", "--stride", "50"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("sliding_window"))
            .stdout(predicate::str::contains("Chunks:         5"));
    }

    #[test]
    fn test_binary_unknown_strategy_fails() {
        chunkwise()
            .args(["describe", "semantic"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown chunking strategy: semantic"));
    }

    #[test]
    fn test_binary_json_error_on_stdout() {
        chunkwise()
            .args(["--format", "json", "chunk", "/nonexistent/file.txt"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"error\""));
    }

    #[test]
    fn test_binary_verbose_logs_to_stderr() {
        chunkwise()
            .args(["--verbose", "chunk"])
            .write_stdin("Some text to chunk.")
            .assert()
            .success()
            .stdout(predicate::str::contains("1 chunks"))
            .stderr(predicate::str::contains("chunked text"));
    }
}
