use super::ViewGraph;
use crate::{error::Result, types::ViewId};
use log::info;
use std::path::Path;

/// Reads the view graph stored in the SQLite3 connection.
///
/// The database must have the following schema:
///
/// ```sql
/// CREATE TABLE views (vid INT);
/// CREATE TABLE overlaps (src INT, dst INT, overlap REAL);
/// ```
///
/// Views are added in `rowid` order.
pub fn graph_from_sqlite(conn: &rusqlite::Connection) -> Result<ViewGraph> {
    let mut views_stmt = conn.prepare("SELECT vid FROM views ORDER BY rowid")?;
    let mut overlaps_stmt = conn.prepare("SELECT src, dst, overlap FROM overlaps ORDER BY rowid")?;
    info!("reading views...");
    let views = views_stmt
        .query_map([], |row| row.get::<_, ViewId>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    info!("reading overlaps...");
    let edges = overlaps_stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<rusqlite::Result<Vec<(ViewId, ViewId, f64)>>>()?;
    ViewGraph::from_parts(views, edges)
}

/// Reads the view graph stored in the SQLite3 file `path`.
pub fn read_sqlite<P: AsRef<Path>>(path: P) -> Result<ViewGraph> {
    let conn = rusqlite::Connection::open(path)?;
    graph_from_sqlite(&conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rusqlite::params;

    fn create_connection(views: &[ViewId], edges: &[(ViewId, ViewId, f64)]) -> rusqlite::Connection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE views (vid INT)", []).unwrap();
        conn.execute("CREATE TABLE overlaps (src INT, dst INT, overlap REAL)", [])
            .unwrap();
        for &vid in views {
            conn.execute("INSERT INTO views VALUES (?1)", params![vid])
                .unwrap();
        }
        for &(src, dst, overlap) in edges {
            conn.execute(
                "INSERT INTO overlaps VALUES (?1, ?2, ?3)",
                params![src, dst, overlap],
            )
            .unwrap();
        }
        conn
    }

    #[test]
    fn test_graph_from_sqlite() {
        let conn = create_connection(&[3, 1, 2], &[(3, 1, 0.25), (1, 2, 0.75)]);
        let g = graph_from_sqlite(&conn).unwrap();
        assert_eq!(g.views(), &[3, 1, 2]);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.edge(0).endpoints(), (0, 1));
        assert_eq!(g.edge(1).overlap(), 0.75);
    }

    #[test]
    fn test_invalid_overlap_in_sqlite() {
        let conn = create_connection(&[1, 2], &[(1, 2, 1.25)]);
        assert!(matches!(
            graph_from_sqlite(&conn),
            Err(Error::InvalidOverlap(1, 2, _))
        ));
    }

    #[test]
    fn test_missing_table() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        assert!(matches!(graph_from_sqlite(&conn), Err(Error::Sqlite(_))));
    }
}
