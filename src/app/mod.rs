// SPDX-License-Identifier: Apache-2.0 OR MIT
pub mod args;
pub mod process;
