pub(crate) mod job_file;
