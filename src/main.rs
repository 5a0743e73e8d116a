// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use reqwest::Method;
use s3presign::s3::creds::{ACCESS_KEY_ENV, SECRET_KEY_ENV, StaticProvider};
use s3presign::s3::error::Error;
use s3presign::s3::http::BaseUrl;
use s3presign::s3::transport::{CurlTransport, HttpTransport};
use s3presign::s3::types::S3Object;
use s3presign::s3::{S3Client, S3ClientBuilder};

/// Work with objects in S3 compatible storage through pre-signed URLs.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Storage host, optionally with scheme and port.
    #[arg(long, global = true, default_value = "s3.amazonaws.com")]
    host: String,
    #[arg(long, global = true, env = ACCESS_KEY_ENV, hide_env_values = true)]
    access_key: Option<String>,
    #[arg(long, global = true, env = SECRET_KEY_ENV, hide_env_values = true)]
    secret_key: Option<String>,
    /// Retries on transient transport failures.
    #[arg(long, global = true, default_value_t = 3)]
    retries: u32,
    #[arg(long, global = true, value_enum, default_value_t = TransportKind::Curl)]
    transport: TransportKind,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum TransportKind {
    /// Run the `curl` executable.
    Curl,
    /// Use the built-in HTTP client.
    Http,
}

#[derive(Subcommand)]
enum Command {
    /// Print the response headers of an object.
    Head { bucket: String, object: String },
    /// Download and verify an object.
    Get {
        bucket: String,
        object: String,
        file: PathBuf,
    },
    /// Upload and verify a file.
    Put {
        bucket: String,
        object: String,
        file: PathBuf,
        /// Store the object with the public-read canned ACL.
        #[arg(long)]
        public: bool,
    },
    /// List the keys of a bucket.
    Ls { bucket: String },
    /// Print a pre-signed URL.
    Sign {
        bucket: String,
        object: String,
        #[arg(long, default_value = "GET")]
        method: String,
    },
}

fn build_client(cli: &Cli) -> Result<S3Client, Box<dyn std::error::Error + Send + Sync>> {
    let (Some(access_key), Some(secret_key)) = (&cli.access_key, &cli.secret_key) else {
        return Err(
            format!("credentials required: set {ACCESS_KEY_ENV} and {SECRET_KEY_ENV}").into(),
        );
    };
    let base_url: BaseUrl = cli.host.parse()?;

    let builder = S3ClientBuilder::new()
        .base_url(base_url)
        .provider(StaticProvider::new(access_key, secret_key))
        .retries(cli.retries);
    let client = match cli.transport {
        TransportKind::Curl => builder.transport(CurlTransport::new()).build()?,
        TransportKind::Http => builder.transport(HttpTransport::new()?).build()?,
    };
    Ok(client)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = build_client(&cli)?;

    match cli.command {
        Command::Head { bucket, object } => {
            let mut object = S3Object::new(bucket, object);
            let info = client.head_info(&mut object)?;
            print!("{}", info.raw_header());
            if !info.is_success() {
                return Err(Error::RequestFailed {
                    result_code: info.result_code(),
                }
                .into());
            }
        }
        Command::Get {
            bucket,
            object,
            file,
        } => {
            let mut object = S3Object::new(bucket, object);
            client.get_object(&mut object, &file)?;
            info!("downloaded {object} to {}", file.display());
        }
        Command::Put {
            bucket,
            object,
            file,
            public,
        } => {
            let mut object = S3Object::new(bucket, object);
            client.put_object(&mut object, &file, public)?;
            info!("uploaded {} as {object}", file.display());
        }
        Command::Ls { bucket } => {
            for key in client.try_list_directory(&bucket)? {
                println!("{key}");
            }
        }
        Command::Sign {
            bucket,
            object,
            method,
        } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())?;
            let signed = client.presigned_url(method, &S3Object::new(bucket, object))?;
            println!("{signed}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to trace requests

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
