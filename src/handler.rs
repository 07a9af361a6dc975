//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `reveal` 子命令的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写管线以及向用户报告结果。

use crate::cli::{HideArgs, RevealArgs};
use crate::crypto::PayloadCipher;
use crate::pipeline;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 为缺省的输出图像生成默认路径：在输入图像旁加上 `hidden_` 前缀。
fn default_out_path(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image"));
    image.with_file_name(format!("hidden_{name}"))
}

/// 检查输出路径是否已被占用；除非用户指定了 `--force`，否则拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像并将其归一化为 RGB、加密并嵌入秘密消息，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、消息与密码的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像的容量不足以隐藏加密后的消息。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let out = args.out.unwrap_or_else(|| default_out_path(&args.image));
    ensure_writable(&out, args.force)?;

    let picture = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let mut cipher = PayloadCipher::new();
    let doctored = pipeline::hide(&mut cipher, &picture, &args.msg, &args.key).with_context(
        || {
            format!(
                "Failed to hide the message in '{}'.",
                args.image.to_string_lossy().red().bold()
            )
        },
    )?;

    doctored.save(&out).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            out.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        out.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、提取并解密隐藏的消息，
/// 然后打印到标准输出，或写入用户指定的文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入路径与密码的 `RevealArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 图像中没有完整的隐藏消息，或长度头部已损坏。
/// * 密码错误或数据被篡改 (GCM 认证失败)。
/// * 无法写入到目标文本文件。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let picture = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let cipher = PayloadCipher::new();
    let secret = pipeline::reveal(&cipher, &picture, &args.key).with_context(|| {
        format!(
            "Failed to reveal a message from '{}'. \nThe image may not contain a hidden message, or the password is wrong.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match args.text {
        Some(text) => {
            ensure_writable(&text, args.force)?;
            fs::write(&text, &secret).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    text.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully revealed and saved: {}",
                text.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("{}", "Revealed message:".green().bold());
            println!("{secret}");
        }
    }

    Ok(())
}
