//! Sails environment config templates written by `config-pws`
//!
//! The two files are opaque artifacts for the Sails config loader; they are
//! never parsed back by this plugin, only written verbatim. Tests compare the
//! written bytes against these literals.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{TreelineError, TreelineResult};

/// A config file to generate, addressed relative to the project root.
pub struct ConfigTemplate {
    pub path: &'static str,
    pub contents: &'static str,
}

pub const CONFIG_TEMPLATES: [ConfigTemplate; 2] = [
    ConfigTemplate {
        path: "config/env/development.js",
        contents: DEVELOPMENT_CONFIG,
    },
    ConfigTemplate {
        path: "config/local.js",
        contents: LOCAL_CONFIG,
    },
];

/// Write both config templates under `project_dir`, overwriting any existing
/// contents, and return the paths written.
pub fn write_config_files(project_dir: &Path) -> TreelineResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(CONFIG_TEMPLATES.len());
    for template in &CONFIG_TEMPLATES {
        let path = project_dir.join(template.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| TreelineError::WriteConfig {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, template.contents).map_err(|source| TreelineError::WriteConfig {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

/// `config/env/development.js` — used when the app runs on PWS. Only takes
/// effect when `VCAP_SERVICES` is present and parses as JSON.
pub const DEVELOPMENT_CONFIG: &str = r#"
/**
 * Development environment settings
 */

if (process.env.VCAP_SERVICES) {
  vcapServices = JSON.parse(process.env.VCAP_SERVICES);

  module.exports = {

    /***************************************************************************
     * Set the default database connection for models in the development       *
     * environment (see config/connections.js and config/models.js )           *
     ***************************************************************************/

    models: {
      connection: 'sailsPsql',
      migrate: 'drop'
    },
    connections: {
      sailsPsql: {
        adapter: 'sails-postgresql',
        url: vcapServices.elephantsql[0].credentials.uri
      }
    },

    /***************************************************************************
     * Session configuration                                                   *
     ***************************************************************************/

    session: {
      adapter: 'redis',
      host: vcapServices.rediscloud[0].credentials.hostname,
      port: vcapServices.rediscloud[0].credentials.port,
      pass: vcapServices.rediscloud[0].credentials.password,
      prefix: 'sess:',
      // ttl: <redis session TTL in seconds>,
      // db: 0,
    },

    /***************************************************************************
     * WebSocket Configuration                                                 *
     ***************************************************************************/

    sockets: {
      adapter: 'socket.io-redis',
      host: vcapServices.rediscloud[0].credentials.hostname,
      port: vcapServices.rediscloud[0].credentials.port,
      pass: vcapServices.rediscloud[0].credentials.password,
      // db: 'sails',
    },

    /***************************************************************************
     * Set the port in the development environment to 80                       *
     ***************************************************************************/

    port: process.env.PORT,

    /***************************************************************************
     * Set the log level in development environment to "silent"                *
     ***************************************************************************/

    log: {
       level: "verbose"
    }

  };
}
"#;

/// `config/local.js` — used for local development, disk-backed database and
/// the Sails default port fallback.
pub const LOCAL_CONFIG: &str = r#"
/**
 * Local environment settings
 */

module.exports = {

  /***************************************************************************
   * Set the default database connection for models in the local             *
   * environment (see config/connections.js and config/models.js )           *
   ***************************************************************************/

  models: {
    connection: 'localDiskDb',
  },
  connections: {
    localDiskDb: {
      adapter: 'sails-disk',
    }
  },

  /***************************************************************************
   * Session configuration                                                   *
   ***************************************************************************/

  session: {
  },

  /***************************************************************************
   * WebSocket Configuration                                                 *
   ***************************************************************************/

  sockets: {
  },

  /***************************************************************************
   * Set the port in the development environment to 80                       *
   ***************************************************************************/

  port: process.env.PORT || 1337,

  /***************************************************************************
   * Set the log level in development environment to "silent"                *
   ***************************************************************************/

  log: {
     level: "verbose"
  }

};
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_both_files_with_template_contents() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_config_files(dir.path()).unwrap();
        assert_eq!(written.len(), 2);

        let dev = fs::read_to_string(dir.path().join("config/env/development.js")).unwrap();
        assert_eq!(dev, DEVELOPMENT_CONFIG);

        let local = fs::read_to_string(dir.path().join("config/local.js")).unwrap();
        assert_eq!(local, LOCAL_CONFIG);
    }

    #[test]
    fn test_overwrites_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("config/env")).unwrap();
        fs::write(dir.path().join("config/local.js"), "stale").unwrap();

        write_config_files(dir.path()).unwrap();

        let local = fs::read_to_string(dir.path().join("config/local.js")).unwrap();
        assert_eq!(local, LOCAL_CONFIG);
    }

    #[test]
    fn test_local_config_has_port_fallback() {
        assert!(LOCAL_CONFIG.contains("process.env.PORT || 1337"));
        assert!(DEVELOPMENT_CONFIG.contains("process.env.VCAP_SERVICES"));
    }
}
