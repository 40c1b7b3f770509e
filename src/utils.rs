use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::SimError;

// The input file holds one track number per line. Lines starting with '#'
// are comments; blank lines are skipped.
pub fn read_request_file(filename: &str) -> Result<Vec<i64>, SimError> {
    let file = File::open(filename)
        .map_err(|err| SimError::Io(format!("failed to open {}: {}", filename, err)))?;
    let reader = BufReader::new(file);

    let mut requests = Vec::new();
    for line in reader.lines() {
        let line =
            line.map_err(|err| SimError::Io(format!("failed to read {}: {}", filename, err)))?;
        let track = line.trim();
        if track.is_empty() || track.starts_with('#') {
            continue;
        }
        let track = track
            .parse::<i64>()
            .map_err(|_| SimError::InvalidInput(format!("bad track number: {}", track)))?;
        requests.push(track);
    }

    if requests.is_empty() {
        return Err(SimError::InvalidInput(format!(
            "no track requests in {}",
            filename
        )));
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_tracks_skipping_comments_and_blanks() {
        let path = write_temp(
            "disksim_requests_ok.txt",
            "# workload\n86\n\n147\n 91 \n",
        );
        let requests = read_request_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(requests, vec![86, 147, 91]);
    }

    #[test]
    fn rejects_non_numeric_lines() {
        let path = write_temp("disksim_requests_bad.txt", "86\nnot-a-track\n");
        let result = read_request_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SimError::InvalidInput(_))));
    }

    #[test]
    fn rejects_files_with_no_requests() {
        let path = write_temp("disksim_requests_empty.txt", "# nothing here\n");
        let result = read_request_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SimError::InvalidInput(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            read_request_file("/nonexistent/disksim_requests.txt"),
            Err(SimError::Io(_))
        ));
    }
}
