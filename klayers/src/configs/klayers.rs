// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

#![warn(missing_docs, clippy::needless_borrow)]
//! Configuration settings that affect all crates in current system.

use ini::Ini;
use lazy_static::lazy_static;

lazy_static! {
    /// Global settings.
    pub static ref KLAYERS_CONF: Ini = Ini::load_from_str(include_str!("./config.toml")).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::time::Duration;

    #[tokio::test]
    async fn setting_shows() -> Result<()> {
        let conf = Ini::load_from_str(include_str!("./config.toml")).unwrap();

        for (sec, prop) in &conf {
            println!("Section: {:?}", sec);
            for (key, value) in prop.iter() {
                println!("{:?}:{:?}", key, value);
            }
        }

        assert_eq!(
            "https://slack.com/api/chat.postMessage",
            &conf["slack"]["api_url"]
        );
        assert_eq!(8, (&conf["slack"]["stage_skip"]).parse::<usize>().unwrap());
        assert_eq!(3, (&conf["slack"]["stage_trim"]).parse::<usize>().unwrap());
        assert_eq!(
            Duration::from_secs(2),
            humantime::parse_duration(&conf["pipeline"]["poll_interval"]).unwrap()
        );
        assert_eq!("kl-Klayers-defaultp38", &conf["pipeline"]["stack_name"]);

        Ok(())
    }
}
