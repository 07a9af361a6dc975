//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，先用 AES-256-GCM 加密秘密消息，
/// 再将密文隐藏进无损格式图像 (如 PNG, BMP) 的像素通道中。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，先用 AES-256-GCM 加密秘密消息，再将密文隐藏进无损格式图像 (如 PNG, BMP) 的像素通道中。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 reveal (揭示)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 加密一段秘密消息并隐藏进无损格式图像 (如 PNG, BMP) 中。
    Hide(HideArgs),

    /// 从经过隐写的图像中解密并揭示隐藏的消息。
    Reveal(RevealArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的秘密消息文本。
    #[arg(short, long)]
    pub msg: String,

    /// 用于加密的密码。
    #[arg(short, long)]
    pub key: String,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 缺省时在输入图像旁生成 `hidden_<文件名>`。
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealArgs {
    /// 已隐藏秘密消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 用于解密的密码。
    #[arg(short, long)]
    pub key: String,

    /// 揭示消息后，保存消息内容的输出路径。缺省时打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
