//! Academic registry: students, teachers, classrooms, subjects, grades

use async_trait::async_trait;
use shared::ListQuery;
use shared::models::{
    Classroom, ClassroomSubject, Grade, LearningContent, Student, Subject, Teacher,
};

use crate::http::{FilePart, HttpClient, MultipartForm};
use crate::resource::Resource;
use crate::ClientResult;

pub const STUDENTS_PATH: &str = "/academic/students/";
pub const TEACHERS_PATH: &str = "/academic/teachers/";
pub const CLASSROOMS_PATH: &str = "/academic/classes/";
pub const SUBJECTS_PATH: &str = "/academic/subjects/";
pub const CLASSROOM_SUBJECTS_PATH: &str = "/academic/classroom-subjects/";
pub const LEARNING_CONTENTS_PATH: &str = "/academic/learning-contents/";
pub const GRADES_PATH: &str = "/academic/grades/";

/// File-backed learning content to upload
#[derive(Debug, Clone)]
pub struct LearningContentUpload {
    pub classroom_subject: i64,
    pub title: String,
    pub description: Option<String>,
    pub file: FilePart,
}

impl LearningContentUpload {
    fn into_form(self) -> MultipartForm {
        let mut form = MultipartForm::new()
            .text("classroom_subject", self.classroom_subject)
            .text("title", self.title)
            .text("content_type", "file");
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        form.file("file", self.file)
    }
}

#[async_trait]
pub trait AcademicApi: HttpClient + Sized {
    fn students(&self) -> Resource<'_, Self, Student> {
        Resource::new(self, STUDENTS_PATH)
    }

    fn teachers(&self) -> Resource<'_, Self, Teacher> {
        Resource::new(self, TEACHERS_PATH)
    }

    fn classrooms(&self) -> Resource<'_, Self, Classroom> {
        Resource::new(self, CLASSROOMS_PATH)
    }

    fn subjects(&self) -> Resource<'_, Self, Subject> {
        Resource::new(self, SUBJECTS_PATH)
    }

    fn classroom_subjects(&self) -> Resource<'_, Self, ClassroomSubject> {
        Resource::new(self, CLASSROOM_SUBJECTS_PATH)
    }

    fn learning_contents(&self) -> Resource<'_, Self, LearningContent> {
        Resource::new(self, LEARNING_CONTENTS_PATH)
    }

    fn grades(&self) -> Resource<'_, Self, Grade> {
        Resource::new(self, GRADES_PATH)
    }

    /// Upload a file as learning content (multipart, no JSON encoding)
    async fn upload_learning_content(
        &self,
        upload: LearningContentUpload,
    ) -> ClientResult<LearningContent> {
        self.post_multipart(LEARNING_CONTENTS_PATH, upload.into_form())
            .await
    }

    /// Every student enrolled in a classroom
    async fn classroom_students(&self, classroom_id: i64) -> ClientResult<Vec<Student>> {
        self.students()
            .all(&ListQuery::new().filter("classroom", classroom_id))
            .await
    }

    /// Every grade of a student
    async fn student_grades(&self, student_id: i64) -> ClientResult<Vec<Grade>> {
        self.grades()
            .all(&ListQuery::new().filter("student", student_id))
            .await
    }
}

impl<C: HttpClient> AcademicApi for C {}
