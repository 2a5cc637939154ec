//! Sample documents shared by the test suites.

/// A document with one block of each common kind.
pub const MAIN_TF: &str = r#"terraform {
  required_version = ">= 1.5"
}

provider "aws" {
  region = var.region
}

variable "region" {
  type    = string
  default = "eu-west-1"
}

variable "db_password" {
  type      = string
  sensitive = true
}

locals {
  tags = {
    Team = "platform"
  }
}

resource "aws_s3_bucket" "logs" {
  bucket = "logs"
  tags   = local.tags
}

data "aws_region" "current" {}

module "vpc" {
  source = "./modules/vpc"
}

output "bucket_arn" {
  value = aws_s3_bucket.logs.arn
}
"#;

/// A second document adding more blocks of already-seen kinds.
pub const EXTRA_TF: &str = r#"variable "instance_count" {
  default = 1
}

resource "aws_s3_bucket" "assets" {
  bucket = "assets"
}
"#;

/// Config routing database names and buckets to dedicated files.
pub const RULES_YAML: &str = r#"rules:
  - ignore_type: true
    name_regex: "^db_.*|.*_db$"
    output_file: database.tf
  - match_type: resource
    sub_type: aws_s3_bucket
    output_file: storage.tf
"#;
