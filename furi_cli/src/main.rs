use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use furi_core::{
    engine::Engine,
    model::{AnnotationResult, Segment},
};
use furi_dict::{Format, KanjiDictionary, Serialization};

struct CliArgs {
    dict_path: PathBuf,
    format: Format,
    serialization: Serialization,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误：{e}");
            let mut source = std::error::Error::source(&*e);
            while let Some(cause) = source {
                eprintln!("  由：{cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(&args.dict_path)?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let dict = KanjiDictionary::new();
    dict.load_dictionary_data(&payload, args.format, args.serialization)?;
    tracing::info!(
        characters = dict.character_count(),
        words = dict.word_count(),
        "dictionary loaded"
    );

    let engine = Engine::new(dict);
    repl(&engine, &args.dict_path)?;
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut out = CliArgs {
        dict_path: default_dict_path(),
        format: Format::Object,
        serialization: Serialization::Json,
    };
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--dict" => {
                let Some(p) = args.next() else {
                    return Err("--dict 需要一个路径参数".to_string());
                };
                out.dict_path = PathBuf::from(p);
            }
            "--format" => {
                out.format = match args.next().as_deref() {
                    Some("full") => Format::Full,
                    Some("object") => Format::Object,
                    Some("single") => Format::Single,
                    other => return Err(format!("无效 --format：{other:?}（full|object|single）")),
                };
            }
            "--serialization" => {
                out.serialization = match args.next().as_deref() {
                    Some("json") => Serialization::Json,
                    Some("string") => Serialization::String,
                    other => return Err(format!("无效 --serialization：{other:?}（json|string）")),
                };
            }
            "--help" | "-h" => print_help(),
            other => return Err(format!("未知参数：{other}（--help 查看用法）")),
        }
    }
    Ok(out)
}

fn print_help() -> ! {
    println!(
        "用法：furi_cli [--dict <path>] [--format full|object|single] [--serialization json|string]\n交互：按行输入文本（回车注音一行），输出 ruby 标记与分段明细；输入 :q 退出"
    );
    std::process::exit(0);
}

fn default_dict_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("dict.json")
}

fn repl(engine: &Engine<KanjiDictionary>, dict_path: &PathBuf) -> io::Result<()> {
    let mut out = io::stdout();
    let mut line = String::new();
    writeln!(out, "furi-rs demo (注音 CLI) | dict: {}", dict_path.display())?;
    writeln!(out, "输入文本后回车。输入 :q 退出。")?;
    out.flush()?;

    loop {
        line.clear();
        print!("text>");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input.is_empty() {
            continue;
        }
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }

        // require_change：无任何可注音段时拿到哨兵，原文保持不动
        let Some(result) = engine.annotate(input, true) else {
            writeln!(out, "(无可注音字符，原文不变)")?;
            continue;
        };

        writeln!(out, "> {}", to_ruby_markup(&result))?;
        for (i, seg) in result.segments.iter().enumerate() {
            let n = i + 1;
            match seg {
                Segment::Plain(text) => writeln!(out, "{n}. 原文\t{text}")?,
                Segment::Annotated { base, gloss } => writeln!(out, "{n}. 注音\t{base}（{gloss}）")?,
            }
        }
    }

    Ok(())
}

/// 渲染为 ruby 标记：注音段 -> `<ruby><rb>…</rb><rt>…</rt></ruby>`（gloss 为空
/// 也照常生成 rt），普通段原样输出。
fn to_ruby_markup(result: &AnnotationResult) -> String {
    let mut out = String::new();
    for seg in &result.segments {
        match seg {
            Segment::Plain(text) => out.push_str(text),
            Segment::Annotated { base, gloss } => {
                out.push_str("<ruby><rb>");
                out.push_str(base);
                out.push_str("</rb><rt>");
                out.push_str(gloss);
                out.push_str("</rt></ruby>");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_renders_ruby_pairs() {
        let result = AnnotationResult {
            segments: vec![
                Segment::Plain("私は".to_string()),
                Segment::Annotated {
                    base: "完璧".to_string(),
                    gloss: "カンペキ".to_string(),
                },
                Segment::Plain("です".to_string()),
            ],
            changed: true,
        };
        assert_eq!(
            to_ruby_markup(&result),
            "私は<ruby><rb>完璧</rb><rt>カンペキ</rt></ruby>です"
        );
    }

    #[test]
    fn empty_gloss_still_gets_rt() {
        let result = AnnotationResult {
            segments: vec![Segment::Annotated {
                base: "完".to_string(),
                gloss: String::new(),
            }],
            changed: true,
        };
        assert_eq!(to_ruby_markup(&result), "<ruby><rb>完</rb><rt></rt></ruby>");
    }
}
