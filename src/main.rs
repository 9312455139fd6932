//! rsuaparser CLI - 单条UA字符串解析

use clap::Parser;

use rsuaparser::UaParser;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "rsuaparser", version, about = "User-Agent字符串结构化解析")]
struct Cli {
    /// 待解析的UA字符串
    agent: String,

    /// 以JSON格式输出（默认为纯文本）
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let parser = UaParser::new(cli.agent);
    let info = parser.info();

    if cli.json {
        match serde_json::to_string_pretty(&info) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                log::error!("Result serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", info);
    }
}
