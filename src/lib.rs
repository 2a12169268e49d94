// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

pub mod aiff_to_mp3;
pub mod conversion_error;
pub mod converter;
pub mod element;
